use std::io;

/// What the process can tell about its standard input without reading it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamInfo {
    pub is_pipe: bool,
    pub len: u64,
}

impl StreamInfo {
    /// A pipe always counts as content; a regular stream only when non-empty.
    pub fn has_content(&self) -> bool {
        self.is_pipe || self.len > 0
    }
}

pub trait StreamProbe {
    fn probe(&self) -> io::Result<StreamInfo>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StdinProbe;

#[cfg(unix)]
impl StreamProbe for StdinProbe {
    fn probe(&self) -> io::Result<StreamInfo> {
        use std::fs::File;
        use std::os::fd::AsFd;
        use std::os::unix::fs::FileTypeExt;

        let stdin = io::stdin();
        let file = File::from(stdin.as_fd().try_clone_to_owned()?);
        let metadata = file.metadata()?;
        Ok(StreamInfo {
            is_pipe: metadata.file_type().is_fifo(),
            len: metadata.len(),
        })
    }
}

#[cfg(not(unix))]
impl StreamProbe for StdinProbe {
    fn probe(&self) -> io::Result<StreamInfo> {
        use std::io::IsTerminal;

        Ok(StreamInfo {
            is_pipe: !io::stdin().is_terminal(),
            len: 0,
        })
    }
}

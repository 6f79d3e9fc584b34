use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::OnceLock;

type Whitelist = HashMap<&'static str, HashSet<&'static str>>;

fn allow(map: &mut Whitelist, step_id: &'static str, inputs: &[&'static str]) {
    map.insert(step_id, inputs.iter().copied().collect());
}

fn whitelist() -> &'static Whitelist {
    static WHITELIST: OnceLock<Whitelist> = OnceLock::new();
    WHITELIST.get_or_init(|| {
        let mut map = Whitelist::new();
        allow(
            &mut map,
            "xcode-test",
            &[
                "simulator_device",
                "simulator_os_version",
                "single_build",
                "should_build_before_test",
            ],
        );
        allow(
            &mut map,
            "ios-auto-provision-appstoreconnect",
            &["connection", "min_profile_days_valid"],
        );
        allow(&mut map, "ios-auto-provision", &["min_profile_days_valid"]);
        map
    })
}

pub fn is_whitelisted(step_id: &str, input: &str) -> bool {
    whitelist()
        .get(step_id)
        .is_some_and(|allowed| allowed.contains(input))
}

/// Keeps only the inputs allowed for `step_id`. Unknown steps keep nothing.
pub fn filter_inputs(step_id: &str, inputs: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    let Some(allowed) = whitelist().get(step_id) else {
        return BTreeMap::new();
    };
    inputs
        .iter()
        .filter(|(key, _)| allowed.contains(key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::state::{self, StateFile};
    use signalfx_provider::{AlertMutingRuleConfig, MutingFilter, ResourceData};

    fn tracked() -> ResourceData {
        let mut data = ResourceData::new(AlertMutingRuleConfig {
            description: "maintenance".into(),
            detectors: vec!["det-1".into()],
            filter: vec![MutingFilter::new("env", "staging", false)],
            start_time: 1_700_000_000,
            stop_time: 0,
        });
        data.set_id("rule-1");
        data.effective_start_time = Some(1_700_000_042_000);
        data
    }

    #[test]
    fn missing_file_is_empty_state() {
        let dir = tempfile::tempdir().unwrap();
        let state = state::load(&dir.path().join("none.json")).unwrap();
        assert!(state.resource.is_none());
        assert!(state.tracked().is_none());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let written = StateFile::with_resource(tracked());

        state::save(&path, &written).unwrap();
        let read = state::load(&path).unwrap();
        assert_eq!(read, written);
        assert_eq!(read.tracked().and_then(|d| d.id()), Some("rule-1"));
        assert!(!dir.path().join("state.json.tmp").exists());
    }

    #[test]
    fn cleared_id_is_not_tracked() {
        let mut data = tracked();
        data.clear_id();
        let state = StateFile::with_resource(data);
        assert!(state.tracked().is_none());
    }

    #[test]
    fn foreign_resource_type_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(
            &path,
            r#"{"version":1,"resource_type":"signalfx_detector","resource":null}"#,
        )
        .unwrap();
        let err = state::load(&path).unwrap_err();
        assert!(err.to_string().contains("signalfx_detector"));
    }

    #[test]
    fn corrupt_state_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(state::load(&path).is_err());
    }
}

use super::*;

fn action(name: &str, frames: usize) -> Action {
    let mut attributes_map_per_frame = Vec::with_capacity(frames);
    for f in 0..frames {
        let mut ov = FrameOverlay::new();
        ov.entry("dot".to_owned())
            .or_default()
            .insert("cx".to_owned(), f.to_string());
        attributes_map_per_frame.push(ov);
    }
    Action {
        name: name.to_owned(),
        attributes_map_per_frame,
    }
}

#[test]
fn list_reports_end_frames_in_declaration_order() {
    let reg = ActionRegistry::new(vec![action("walk", 11), action("jump", 4)]);
    assert_eq!(
        reg.list(),
        vec![
            ActionInfo {
                name: "walk".to_owned(),
                end_frame: FrameIndex(10),
            },
            ActionInfo {
                name: "jump".to_owned(),
                end_frame: FrameIndex(3),
            },
        ]
    );
    assert_eq!(reg.len(), 2);
    assert_eq!(reg.default_action(), "walk");
}

#[test]
fn resolve_fails_for_unknown_names() {
    let reg = ActionRegistry::new(vec![action("walk", 2)]);
    assert_eq!(reg.resolve("walk").unwrap().frame_count(), 2);
    let err = reg.resolve("run").unwrap_err();
    assert!(matches!(err, FrameplayError::UnknownAction(ref n) if n == "run"));
    assert!(!reg.contains("run"));
}

#[test]
fn empty_registry_uses_sentinel() {
    let reg = ActionRegistry::new(vec![]);
    assert!(reg.is_empty());
    assert_eq!(reg.default_action(), "");
    assert_eq!(reg.end_frame(""), FrameIndex::ZERO);
    assert!(reg.overlay("", FrameIndex::ZERO).is_empty());
    assert!(reg.list().is_empty());
}

#[test]
fn overlay_looks_up_frame() {
    let reg = ActionRegistry::new(vec![action("walk", 3)]);
    assert_eq!(reg.overlay("walk", FrameIndex(2))["dot"]["cx"], "2");
    assert!(reg.overlay("walk", FrameIndex(3)).is_empty());
}

#[test]
fn first_declaration_wins_on_duplicate_names() {
    let reg = ActionRegistry::new(vec![action("walk", 5), action("walk", 2)]);
    assert_eq!(reg.end_frame("walk"), FrameIndex(4));
}

#[test]
fn action_info_serializes_camel_case() {
    let info = ActionInfo {
        name: "walk".to_owned(),
        end_frame: FrameIndex(7),
    };
    let v = serde_json::to_value(&info).unwrap();
    assert_eq!(v, serde_json::json!({"name": "walk", "endFrame": 7}));
}

use super::*;

#[test]
fn platform_parses_common_spellings() {
    assert_eq!("windows".parse::<Platform>().unwrap(), Platform::Windows);
    assert_eq!(" macOS ".parse::<Platform>().unwrap(), Platform::Mac);
    assert_eq!("mac".parse::<Platform>().unwrap(), Platform::Mac);
    let err = "linux".parse::<Platform>().unwrap_err();
    assert!(err.to_string().starts_with("validation error:"), "{err}");
}

#[test]
fn platform_labels() {
    assert_eq!(Platform::Windows.label(), "Windows");
    assert_eq!(Platform::Mac.to_string(), "macOS");
    assert_eq!(serde_json::to_string(&Platform::Mac).unwrap(), "\"mac\"");
}

#[test]
fn step_list_rejects_empty() {
    assert!(StepList::new(Vec::new()).is_err());
    let list = StepList::new(vec![Step::new(0, "a", "b")]).unwrap();
    assert_eq!(list.len(), 1);
    assert!(!list.is_empty());
    assert_eq!(list[0].title, "a");

    let err = serde_json::from_str::<StepList>("[]").unwrap_err();
    assert!(err.to_string().contains("must not be empty"), "{err}");
}

#[test]
fn step_builders_and_json_shape() {
    let step = Step::new(4, "Fix", "Paste it")
        .with_command("xattr -cr app")
        .with_visual(VisualRef::FilesTutorial(Platform::Windows));
    let json = serde_json::to_value(&step).unwrap();
    assert_eq!(json["command"], "xattr -cr app");
    assert_eq!(json["visual"]["files_tutorial"], "windows");
    assert!(json.get("action").is_none());

    let back: Step = serde_json::from_value(json).unwrap();
    assert_eq!(back, step);
}

#[test]
fn clones_share_the_same_steps() {
    let list = StepList::new(vec![Step::new(0, "a", "b"), Step::new(1, "c", "d")]).unwrap();
    let other = list.clone();
    assert!(std::ptr::eq(list.as_ptr(), other.as_ptr()));
}

#[test]
fn step_list_serializes_as_plain_array() {
    let list = StepList::new(vec![Step::new(0, "a", "b"), Step::new(1, "c", "d")]).unwrap();
    let json = serde_json::to_value(&list).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[1]["title"], "c");

    let back: StepList = serde_json::from_value(json).unwrap();
    assert_eq!(back, list);
}

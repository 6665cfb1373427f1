use hscommon::project::{Project, WindowSnapshot, WorkspaceLayout};

#[test]
fn project_serialization_roundtrip() {
    let mut project = Project::new("Test Mod");
    project.description = "Palette experiments".to_string();
    project.author = "somebody".to_string();
    project.auxiliary_mpq_paths.push("d2data.mpq".into());
    project.layout = WorkspaceLayout {
        windows: vec![
            WindowSnapshot {
                path: "data/act1.dc6".to_string(),
                state: vec![1, 0, 0, 0, 2, 0, 0, 0],
                x: 120.0,
                y: 80.0,
                width: 420.0,
                height: 360.0,
            },
            WindowSnapshot {
                path: "data/pal.dat".to_string(),
                state: Vec::new(),
                x: 200.0,
                y: 140.0,
                width: 380.0,
                height: 420.0,
            },
        ],
    };

    let json = project.save().expect("failed to serialize project");
    let loaded = Project::load(&json).expect("failed to deserialize project");

    assert_eq!(project, loaded);
    assert_eq!(loaded.layout.windows.len(), 2);
    assert_eq!(loaded.layout.windows[0].path, "data/act1.dc6");
    assert_eq!(loaded.layout.windows[0].state, vec![1, 0, 0, 0, 2, 0, 0, 0]);
}

#[test]
fn file_roundtrip_sets_root_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("mymod.hsp");

    let mut project = Project::new("My Mod");
    project.save_file(&path).expect("failed to save project");

    let loaded = Project::load_file(&path).expect("failed to load project");
    assert_eq!(loaded.name, "My Mod");
    assert_eq!(loaded.root_dir(), Some(dir.path()));
}

#[test]
fn missing_fields_default() {
    // Older project files carry only the identity fields.
    let json = r#"{"id":"6dbe20f4-6a25-4d43-9f26-1a4d3f7a2b10","name":"Bare"}"#;
    let project = Project::load(json).expect("failed to load bare project");
    assert_eq!(project.name, "Bare");
    assert!(project.layout.is_empty());
    assert!(project.auxiliary_mpq_paths.is_empty());
}

use super::*;

fn temp_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "layerstack_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

const PRODUCTS: &str = r#"[
  {
    "id": "p1",
    "filePath": "products/p1.png",
    "meta": {
      "category": "AC",
      "acFormFactor": "WALL",
      "series": "S",
      "color": "White",
      "energyLevels": ["B1"],
      "capacityCodes": ["35"]
    }
  }
]"#;

const PROJECTS: &str = r#"[
  {
    "id": "proj-1",
    "projectName": "summer",
    "canvasWidth": 800,
    "canvasHeight": 800,
    "template": { "layerOrder": [{ "type": "price", "zIndex": 300 }] }
  }
]"#;

const DECORATIONS: &str = r#"[
  {
    "id": "d1",
    "filePath": "decorations/d1.png",
    "meta": { "projectName": "summer", "category": "ENERGY_BADGE", "energyLevels": ["B1"] }
  },
  {
    "id": "d2",
    "filePath": "decorations/d2.png",
    "meta": { "projectName": "winter", "category": "BACKGROUND" }
  }
]"#;

#[test]
fn load_reads_all_collections() {
    let tmp = temp_dir("catalog_load");
    std::fs::create_dir_all(&tmp).unwrap();
    std::fs::write(tmp.join(PRODUCTS_FILE), PRODUCTS).unwrap();
    std::fs::write(tmp.join(PROJECTS_FILE), PROJECTS).unwrap();
    std::fs::write(tmp.join(DECORATIONS_FILE), DECORATIONS).unwrap();

    let catalog = JsonCatalog::load(&tmp).unwrap();
    assert_eq!(catalog.products().len(), 1);
    let p = catalog.product("p1").unwrap();
    assert_eq!(
        p.meta.applicability.energy_levels.as_deref(),
        Some(&["B1".to_string()][..])
    );

    let project = catalog.project_by_name("summer").unwrap();
    assert_eq!(project.id, "proj-1");
    assert!(catalog.project_by_id("proj-1").is_some());
    assert!(catalog.project_by_name("autumn").is_none());

    let decos = catalog.decorations_by_project("summer");
    assert_eq!(decos.len(), 1);
    assert_eq!(decos[0].id, "d1");
    assert!(catalog.instances_by_project("proj-1").is_empty());

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn missing_files_are_empty() {
    let tmp = temp_dir("catalog_missing");
    let catalog = JsonCatalog::load(&tmp).unwrap();
    assert!(catalog.products().is_empty());
    assert!(catalog.decorations().is_empty());
    assert!(catalog.projects().is_empty());
    assert!(catalog.instances().is_empty());
}

#[test]
fn malformed_file_is_a_serde_error() {
    let tmp = temp_dir("catalog_malformed");
    std::fs::create_dir_all(&tmp).unwrap();
    std::fs::write(tmp.join(PROJECTS_FILE), "{ not json").unwrap();

    let err = JsonCatalog::load(&tmp).unwrap_err();
    assert!(matches!(err, LayerstackError::Serde(_)));
    assert!(err.to_string().contains(PROJECTS_FILE));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn malformed_product_does_not_block_loading() {
    let tmp = temp_dir("catalog_invalid_product");
    std::fs::create_dir_all(&tmp).unwrap();
    std::fs::write(
        tmp.join(PRODUCTS_FILE),
        r#"[
          {"id":"bad","filePath":"bad.png","meta":{"category":"AC","series":"S","color":"C"}},
          {"id":"good","filePath":"good.png","meta":{"category":"LIFE_APPLIANCE","series":"S","color":"C"}}
        ]"#,
    )
    .unwrap();

    let catalog = JsonCatalog::load(&tmp).unwrap();
    assert_eq!(catalog.products().len(), 2);
    assert!(matches!(
        catalog.product("bad").unwrap().validate().unwrap_err(),
        LayerstackError::InvalidMetadata(_)
    ));
    assert!(catalog.product("good").unwrap().validate().is_ok());

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn write_then_read_records() {
    let tmp = temp_dir("catalog_write");
    let path = tmp.join("nested").join(INSTANCES_FILE);
    let records = vec![InstanceConfig::new("proj", "p1", None, None)];
    write_records(&path, &records).unwrap();
    let back: Vec<InstanceConfig> = read_records(&path).unwrap();
    assert_eq!(back, records);
    std::fs::remove_dir_all(&tmp).ok();
}

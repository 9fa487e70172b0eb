use std::io::Write;

use speculate2::speculate;

use capmap::catalog::{Catalog, CatalogError};
use capmap::filter::{filter_by_domain, preserve_capability_hierarchy};
use capmap::render;

const SAMPLE_JSON: &str = r#"{
  "domains": [
    { "id": "dom-payments", "name": "Payments", "description": null }
  ],
  "artifacts": {
    "components": [
      {
        "id": "comp-ledger",
        "name": "Ledger Service",
        "description": "Double-entry ledger",
        "created_at": "2024-03-01T09:00:00Z",
        "updated_at": "2024-03-01T09:00:00Z"
      }
    ],
    "capabilities": [
      {
        "id": "cap-payments",
        "name": "Payments",
        "parent_id": null,
        "level": 0,
        "description": null,
        "created_at": "2024-03-01T09:00:00Z",
        "updated_at": "2024-03-01T09:00:00Z"
      },
      {
        "id": "cap-settlement",
        "name": "Settlement",
        "parent_id": "cap-payments",
        "level": 1,
        "description": null,
        "created_at": "2024-03-01T09:00:00Z",
        "updated_at": "2024-03-01T09:00:00Z"
      }
    ],
    "acquired_entities": [],
    "vendors": [
      {
        "id": "ven-acme",
        "name": "Acme Billing",
        "description": null,
        "created_at": "2024-03-01T09:00:00Z",
        "updated_at": "2024-03-01T09:00:00Z"
      }
    ],
    "internal_teams": [],
    "relationships": [
      {
        "id": "rel-1",
        "component_id": "comp-ledger",
        "origin_entity_id": "ven-acme",
        "relationship_type": "purchased_from",
        "created_at": "2024-03-01T09:00:00Z"
      }
    ]
  },
  "capability_assignments": { "dom-payments": ["cap-payments"] },
  "component_assignments": { "dom-payments": ["comp-ledger"] },
  "creators": { "comp-ledger": "alice" }
}"#;

fn capability_json(id: &str, parent_id: Option<&str>) -> String {
    let parent = match parent_id {
        Some(p) => format!("\"{p}\""),
        None => "null".to_string(),
    };
    format!(
        r#"{{
          "id": "{id}",
          "name": "{id}",
          "parent_id": {parent},
          "level": 0,
          "description": null,
          "created_at": "2024-03-01T09:00:00Z",
          "updated_at": "2024-03-01T09:00:00Z"
        }}"#
    )
}

fn catalog_with_capabilities(capabilities: &[String]) -> Catalog {
    let json = format!(
        r#"{{ "artifacts": {{ "capabilities": [{}] }} }}"#,
        capabilities.join(",")
    );
    Catalog::from_json_str(&json).expect("Failed to parse catalogue")
}

speculate! {
    describe "loading" {
        it "parses a full snapshot" {
            let catalog = Catalog::from_json_str(SAMPLE_JSON).expect("Failed to parse");
            assert_eq!(catalog.domains.len(), 1);
            assert_eq!(catalog.artifacts.capabilities.len(), 2);
            assert_eq!(catalog.artifacts.relationships.len(), 1);
            assert_eq!(catalog.domain_ids(), vec!["dom-payments".to_string()]);
        }

        it "defaults every missing section to empty" {
            let catalog = Catalog::from_json_str("{}").expect("Failed to parse");
            assert!(catalog.domains.is_empty());
            assert!(catalog.artifacts.is_empty());
            assert!(catalog.creators.is_empty());
            assert!(catalog.validate().is_ok());
        }

        it "rejects malformed JSON" {
            assert!(Catalog::from_json_str("not json").is_err());
        }

        it "loads from a file on disk" {
            let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
            file.write_all(SAMPLE_JSON.as_bytes()).expect("Failed to write");
            let catalog = Catalog::from_json_file(file.path()).expect("Failed to load");
            assert_eq!(catalog.artifacts.components.len(), 1);
        }

        it "fails with context for a missing file" {
            let err = Catalog::from_json_file(std::path::Path::new("/nonexistent/catalog.json"))
                .expect_err("Expected a load failure");
            assert!(err.to_string().contains("catalog.json"));
        }
    }

    describe "validation" {
        it "accepts an acyclic capability forest" {
            let catalog = Catalog::from_json_str(SAMPLE_JSON).expect("Failed to parse");
            assert!(catalog.validate().is_ok());
        }

        it "rejects a parent cycle" {
            let catalog = catalog_with_capabilities(&[
                capability_json("a", Some("b")),
                capability_json("b", Some("a")),
            ]);
            assert!(matches!(
                catalog.validate(),
                Err(CatalogError::ParentCycle { .. })
            ));
        }

        it "rejects a self-referential capability" {
            let catalog = catalog_with_capabilities(&[capability_json("a", Some("a"))]);
            assert_eq!(
                catalog.validate(),
                Err(CatalogError::ParentCycle {
                    capability_id: "a".to_string()
                })
            );
        }

        it "rejects a dangling parent pointer" {
            let catalog = catalog_with_capabilities(&[capability_json("a", Some("gone"))]);
            assert_eq!(
                catalog.validate(),
                Err(CatalogError::UnknownParent {
                    capability_id: "a".to_string(),
                    parent_id: "gone".to_string()
                })
            );
        }

        it "rejects duplicate capability ids" {
            let catalog = catalog_with_capabilities(&[
                capability_json("a", None),
                capability_json("a", None),
            ]);
            assert_eq!(
                catalog.validate(),
                Err(CatalogError::DuplicateId {
                    id: "a".to_string()
                })
            );
        }
    }

    describe "end to end" {
        it "filters a loaded snapshot and renders the surviving tree" {
            let catalog = Catalog::from_json_str(SAMPLE_JSON).expect("Failed to parse");
            catalog.validate().expect("Snapshot should be valid");

            let domain_ids = catalog.domain_ids();
            let ctx = catalog.context(&domain_ids);

            let selection = vec!["dom-payments".to_string()];
            let mut bundle = filter_by_domain(catalog.artifacts.clone(), &selection, &ctx);
            bundle.capabilities = preserve_capability_hierarchy(
                &bundle.capabilities,
                &catalog.artifacts.capabilities,
            );

            assert_eq!(bundle.components.len(), 1);
            assert_eq!(bundle.vendors.len(), 1, "vendor reached via the purchase edge");
            assert_eq!(bundle.capabilities.len(), 2);

            let tree = render::render_tree(&render::build_tree(&bundle.capabilities));
            assert_eq!(tree, "Payments\n└── Settlement\n");
        }
    }
}

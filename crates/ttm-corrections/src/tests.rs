//! Tests for the correction-configuration parser

use crate::schema::*;

const FIXTURE: &str = r#"{
    "version": "2016-moriond",
    "electron": {
        "id_loose": {
            "pt_edges": [10.0, 25.0, 50.0, 100.0],
            "abs_eta_edges": [0.0, 1.479, 2.5],
            "values": [0.97, 0.95, 0.98, 0.96, 0.99, 0.97]
        },
        "iso": {
            "pt_edges": [10.0, 100.0],
            "abs_eta_edges": [0.0, 2.5],
            "values": [0.99]
        },
        "id_tight": {
            "barrel": { "edges": [10.0, 40.0, 100.0], "values": [0.93, 0.95] },
            "endcap": { "edges": [10.0, 40.0, 100.0], "values": [0.90, 0.92] }
        }
    },
    "muon": {
        "ip": { "edges": [0.0, 1.2, 2.4], "values": [0.998, 0.995] }
    }
}"#;

#[test]
fn test_parse_fixture() {
    let config = CorrectionConfig::from_json_str(FIXTURE).unwrap();
    assert_eq!(config.version.as_deref(), Some("2016-moriond"));

    let electron = config.electron.unwrap();
    let id_loose = electron.id_loose.unwrap();
    assert_eq!(id_loose.pt_edges.len(), 4);
    assert_eq!(id_loose.values.len(), 6);
    assert!(electron.conv_veto.is_none());
    assert_eq!(electron.id_tight.unwrap().barrel.values, vec![0.93, 0.95]);

    let muon = config.muon.unwrap();
    assert!(muon.id_loose.is_none());
    assert_eq!(muon.ip.unwrap().edges, vec![0.0, 1.2, 2.4]);
}

#[test]
fn test_empty_object_is_valid() {
    let config = CorrectionConfig::from_json_str("{}").unwrap();
    assert!(config.electron.is_none());
    assert!(config.muon.is_none());
}

#[test]
fn test_malformed_json_is_fatal() {
    assert!(CorrectionConfig::from_json_str("{ \"electron\": 42 }").is_err());
    assert!(CorrectionConfig::from_json_str("not json").is_err());
}

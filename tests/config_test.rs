use humanage::config::{Config, CONFIG_FILE_NAME};
use humanage::error::Error;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.scoring.default_intensity, 50);
    assert_eq!(config.ring.size, 160.0);
    assert_eq!(config.ring.thickness, 14.0);
    assert_eq!(config.categories.len(), 5);
    assert_eq!(config.categories[0].key, "anthropometry");
    assert!(config.data.is_none());
}

#[test]
fn test_load_config_from_toml() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        r#"
data = "patients.json"

[ring]
size = 200.0
thickness = 20.0

[scoring]
default_intensity = 75

[[categories]]
key = "sleep"
label = "Schlaf"
base_value = 62.0

[[categories]]
key = "stress"
label = "Stress\nManagement"
base_value = 40.0
extra_max = 10.0
"#,
    )
    .unwrap();

    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config.scoring.default_intensity, 75);
    assert_eq!(config.geometry().radius(), 90.0);
    assert_eq!(config.categories.len(), 2);
    assert_eq!(config.categories[0].extra_max, 20.0);
    assert_eq!(config.categories[1].extra_max, 10.0);
    assert_eq!(config.categories[1].label, "Stress\nManagement");
    assert_eq!(config.data, Some(dir.path().join("patients.json")));
}

#[test]
fn test_missing_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config.scoring.default_intensity, 50);
    assert_eq!(config.categories.len(), 5);
}

#[test]
fn test_partial_config_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        r#"
[ring]
thickness = 10.0
"#,
    )
    .unwrap();

    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config.ring.size, 160.0);
    assert_eq!(config.ring.thickness, 10.0);
    assert_eq!(config.scoring.default_intensity, 50);
    assert_eq!(config.categories.len(), 5);
}

#[test]
fn test_empty_category_list_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "categories = []\n").unwrap();

    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config.categories.len(), 5);
}

#[test]
fn test_absolute_data_path_is_kept() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("elsewhere").join("patients.json");
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        format!("data = {:?}\n", data.to_string_lossy()),
    )
    .unwrap();

    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config.data, Some(data));
}

#[test]
fn test_invalid_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[scoring]\ndefault_intensity = \"high\"\n",
    )
    .unwrap();

    let err = Config::load(dir.path()).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("Failed to parse config"));
}

fn load_ring(ring_section: &str) -> Result<Config, Error> {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        format!("[ring]\n{ring_section}\n"),
    )
    .unwrap();
    Config::load(dir.path())
}

#[test]
fn test_negative_ring_thickness_is_rejected() {
    let err = load_ring("thickness = -14.0").unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("Invalid ring thickness"));
}

#[test]
fn test_negative_ring_size_is_rejected() {
    let err = load_ring("size = -1.0\nthickness = 0.0").unwrap_err();
    assert!(err.to_string().contains("Invalid ring size"));
}

#[test]
fn test_non_finite_ring_size_is_rejected() {
    let err = load_ring("size = nan").unwrap_err();
    assert!(err.to_string().contains("Invalid ring size"));

    let err = load_ring("size = inf").unwrap_err();
    assert!(err.to_string().contains("Invalid ring size"));
}

#[test]
fn test_thickness_wider_than_ring_is_rejected() {
    let err = load_ring("size = 10.0\nthickness = 30.0").unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("exceeds ring size"));
}

#[test]
fn test_stroke_as_wide_as_ring_is_accepted() {
    let config = load_ring("size = 20.0\nthickness = 20.0").unwrap();
    assert_eq!(config.geometry().radius(), 0.0);
}

#[test]
fn test_geometry_clamps_values_set_in_code() {
    let mut config = Config::default();
    config.ring.size = 10.0;
    config.ring.thickness = 30.0;
    let geometry = config.geometry();
    assert_eq!(geometry.thickness, 10.0);
    assert_eq!(geometry.radius(), 0.0);

    config.ring.thickness = -14.0;
    let geometry = config.geometry();
    assert_eq!(geometry.thickness, 0.0);
    assert_eq!(geometry.radius(), 5.0);

    config.ring.size = f64::NAN;
    let geometry = config.geometry();
    assert_eq!(geometry.size, 0.0);
    assert_eq!(geometry.radius(), 0.0);
}

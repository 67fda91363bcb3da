use app::dock::{Direction, Visibility};
use app::store::{ContentStore, Error};
use std::path::PathBuf;

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn fixture(name: &str) -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "tests", "data", name].iter().collect()
}

#[test]
fn load_site() {
    setup();

    let store = ContentStore::new(fixture("site.yml"), false);
    let site = store.load().unwrap();
    assert_eq!("Test site", site.title);
    assert_eq!("Tester", site.profile.name);
    assert_eq!(None, site.profile.avatar);
    assert_eq!(1, site.socials.len());
    assert_eq!(1, site.stats.len());

    let dock = &site.dock;
    assert_eq!(65.0, dock.config.magnification);
    assert_eq!(140.0, dock.config.distance);
    assert_eq!(40.0, dock.config.min_size);
    assert_eq!(Direction::Middle, dock.config.direction);
    assert_eq!(200.0, dock.config.spring.stiffness);
    assert_eq!(0.1, dock.config.spring.mass);
    assert_eq!(2, dock.links.len());
    assert_eq!(Visibility::Always, dock.links[0].visibility);
    assert_eq!(Visibility::Lg, dock.links[1].visibility);
}

#[test]
fn optional_sections_default_to_empty() {
    setup();

    let site = ContentStore::read(&fixture("minimal.yml")).unwrap();
    assert!(site.socials.is_empty());
    assert!(site.stats.is_empty());
    assert!(site.pitch.is_none());
    assert!(site.now.is_none());
    assert!(site.dock.links.is_empty());
    assert_eq!(app::dock::DockConfig::default(), site.dock.config);
}

#[test]
fn the_shipped_content_is_valid() {
    setup();

    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "..", "content", "site.yml"]
        .iter()
        .collect();
    let site = ContentStore::read(&path).unwrap();
    assert!(!site.dock.links.is_empty());
    assert_eq!(65.0, site.dock.config.magnification);
    assert_eq!(113.0, site.dock.config.distance);
}

#[test]
fn missing_file() {
    setup();

    let store = ContentStore::new(fixture("does_not_exist.yml"), false);
    assert!(matches!(store.load(), Err(Error::IO { .. })));
}

#[test]
fn invalid_yaml() {
    setup();

    let result = ContentStore::read(&fixture("not_yaml.yml"));
    assert!(matches!(result, Err(Error::Deserialize { .. })));
}

#[test]
fn magnification_below_min_size_is_rejected() {
    setup();

    match ContentStore::read(&fixture("inverted.yml")) {
        Err(Error::Invalid { reason, .. }) => assert!(reason.contains("magnification"), "{reason}"),
        other => panic!("expected Error::Invalid, got {:?}", other),
    }
}

#[test]
fn empty_href_is_rejected() {
    setup();

    match ContentStore::read(&fixture("empty_href.yml")) {
        Err(Error::Invalid { reason, .. }) => assert!(reason.contains("nowhere"), "{reason}"),
        other => panic!("expected Error::Invalid, got {:?}", other),
    }
}

#[test]
fn prod_store_caches_the_first_load() {
    setup();

    let dir = std::env::temp_dir().join(format!("portfolio-store-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("site.yml");
    std::fs::copy(fixture("site.yml"), &path).unwrap();

    let prod = ContentStore::new(path.clone(), true);
    let dev = ContentStore::new(path.clone(), false);
    assert_eq!("Test site", prod.load().unwrap().title);

    std::fs::copy(fixture("minimal.yml"), &path).unwrap();
    assert_eq!("Test site", prod.load().unwrap().title);
    assert_eq!("Minimal", dev.load().unwrap().title);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn get_site_reads_the_store_from_context() {
    use leptos::prelude::{provide_context, Owner};
    setup();

    let owner = Owner::new();
    owner.set();
    provide_context(ContentStore::new(fixture("site.yml"), false));
    let site = app::pages::home::get_site().await.unwrap();
    assert_eq!("Test site", site.title);
    assert_eq!(2, site.dock.links.len());
}

#[tokio::test]
async fn get_site_without_a_store() {
    use leptos::prelude::Owner;
    setup();

    let owner = Owner::new();
    owner.set();
    let error = app::pages::home::get_site().await.unwrap_err();
    assert!(error.to_string().contains("content store"), "{error}");
}

#[tokio::test]
async fn get_site_reports_store_errors() {
    use leptos::prelude::{provide_context, Owner};
    setup();

    let owner = Owner::new();
    owner.set();
    provide_context(ContentStore::new(fixture("inverted.yml"), false));
    let error = app::pages::home::get_site().await.unwrap_err();
    assert!(error.to_string().contains("magnification"), "{error}");
}

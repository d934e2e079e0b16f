//! End-to-end reads against a Content Store laid out on disk.

use std::fs;
use std::path::Path;

use assert_matches::assert_matches;
use atelier_content::repositories::{PressRepo, ProjectRepo, SettingsRepo};
use atelier_content::{project_image_path, ContentError, ContentStore};
use atelier_core::category::ProjectCategory;
use atelier_core::locale::Locale;

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn seed(root: &Path) {
    write(
        root,
        "projects/villa-azul/data.json",
        r#"{"title":"Villa Azul","category":"villa","location":"Marbella","year":2023,
            "photographer":"Lucía Ortega","description":"Villa frente al mar",
            "descriptionEn":"Seafront villa","featured":true,"order":2,
            "mainImage":"portada.jpg","gallery":["01.jpg","02.jpg","03.jpg"]}"#,
    );
    write(
        root,
        "projects/atico-sol/data.json",
        r#"{"title":"Ático Sol","category":"penthouse","location":"Málaga","year":2021,
            "order":1}"#,
    );
    write(
        root,
        "projects/barco/data.json",
        r#"{"title":"Barco","category":"yacht","location":"Puerto Banús","year":2020,
            "order":3}"#,
    );
    // Folder with images but no record yet.
    write(root, "projects/en-curso/portada.jpg", "");
    write(
        root,
        "settings/site.json",
        r#"{"studioName":"Estudio Norte","address":"Calle Mayor 1","city":"Marbella",
            "phone":"+34 952 000 000","email":"hola@estudionorte.es",
            "seoTitle":"Estudio Norte","seoDescription":"Arquitectura e interiorismo"}"#,
    );
    write(
        root,
        "settings/about.json",
        r#"{"text":"Somos un estudio","textEn":"We are a studio"}"#,
    );
}

#[tokio::test]
async fn reads_projects_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());
    let store = ContentStore::filesystem(dir.path());

    let projects = ProjectRepo::list(&store).await.unwrap();
    let slugs: Vec<&str> = projects.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["atico-sol", "villa-azul", "barco"]);

    let barco = &projects[2];
    assert_eq!(barco.category, ProjectCategory::Other("yacht".into()));

    let villa = ProjectRepo::find_by_slug(&store, "villa-azul").await.unwrap();
    assert_eq!(villa.description_for(Locale::En), "Seafront villa");
    assert_eq!(villa.photographer.as_deref(), Some("Lucía Ortega"));
    assert_eq!(
        project_image_path(&villa.slug, &villa.gallery[0]),
        "/projects/villa-azul/01.jpg"
    );

    assert!(ProjectRepo::find_by_slug(&store, "en-curso").await.is_none());
}

#[tokio::test]
async fn reads_singletons_and_tolerates_missing_press() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());
    let store = ContentStore::filesystem(dir.path());

    let settings = SettingsRepo::site(&store).await.unwrap();
    assert_eq!(settings.city, "Marbella");

    let about = SettingsRepo::about(&store).await.unwrap();
    assert_eq!(about.text_for(Locale::En), "We are a studio");

    assert!(PressRepo::list(&store).await.unwrap().is_empty());
}

#[tokio::test]
async fn absent_store_is_empty_but_settings_are_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContentStore::filesystem(dir.path().join("missing"));

    assert!(ProjectRepo::list(&store).await.unwrap().is_empty());
    assert!(PressRepo::list(&store).await.unwrap().is_empty());
    assert_matches!(
        SettingsRepo::site(&store).await,
        Err(ContentError::MissingRecord { .. })
    );
    assert_matches!(
        SettingsRepo::about(&store).await,
        Err(ContentError::MissingRecord { .. })
    );
}

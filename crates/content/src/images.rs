/// Public URL path of a project image.
///
/// Pure string composition; the path is served from the static assets root.
pub fn project_image_path(slug: &str, image_name: &str) -> String {
    format!("/projects/{slug}/{image_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_path_from_slug_and_image() {
        assert_eq!(
            project_image_path("casa-levante", "salon-01.jpg"),
            "/projects/casa-levante/salon-01.jpg"
        );
    }
}

//! Template rendering.
//!
//! The template is plain text with two placeholder tokens.  Every occurrence
//! of each token is replaced; nothing else in the document is touched.

use std::fs;
use std::path::Path;

use crate::error::RenderError;
use crate::source::PostRecord;

/// Replaced by the post title.
pub const TITLE_PLACEHOLDER: &str = "{templ_title}";
/// Replaced by the post URL.
pub const IMAGE_PLACEHOLDER: &str = "{templ_image}";

/// Title used when the post has none.
pub const DEFAULT_TITLE: &str = "Top Post";

/// The title to show for `post`.  Absent and empty titles both fall back
/// to [`DEFAULT_TITLE`].
pub fn display_title(post: &PostRecord) -> &str {
    post.title
        .as_deref()
        .filter(|title| !title.is_empty())
        .unwrap_or(DEFAULT_TITLE)
}

/// Substitute `post` into `template`.
///
/// The title is substituted first, then the image URL.
pub fn render_template(template: &str, post: &PostRecord) -> String {
    let title = display_title(post);
    let image = post.url.as_deref().unwrap_or_default();
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(IMAGE_PLACEHOLDER, image)
}

/// Read `template_path`, render `post` into it and write `output_path`.
///
/// The output file is created or truncated.  If the template cannot be read
/// the output is left as it was.
pub fn render(
    post: &PostRecord,
    template_path: &Path,
    output_path: &Path,
) -> Result<(), RenderError> {
    let template =
        fs::read_to_string(template_path).map_err(|source| RenderError::ReadTemplate {
            path: template_path.to_path_buf(),
            source,
        })?;

    let content = render_template(&template, post);

    fs::write(output_path, content).map_err(|source| RenderError::WriteOutput {
        path: output_path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::make_post;

    #[test]
    fn substitutes_title_and_image() {
        let post = make_post("Cat Meme", Some("http://x/a.jpg"), 10);
        assert_eq!(
            render_template("{templ_title} / {templ_image}", &post),
            "Cat Meme / http://x/a.jpg"
        );
    }

    #[test]
    fn replaces_every_occurrence() {
        let post = make_post("T", Some("u.png"), 1);
        let template = "# {templ_title}\n![{templ_title}]({templ_image})\n{templ_image}";
        let out = render_template(template, &post);
        assert_eq!(out, "# T\n![T](u.png)\nu.png");
    }

    #[test]
    fn missing_title_renders_default() {
        let post = PostRecord {
            url: Some("u.gif".into()),
            ..PostRecord::default()
        };
        assert_eq!(render_template("[{templ_title}]", &post), "[Top Post]");
    }

    #[test]
    fn empty_title_renders_default() {
        let post = PostRecord {
            title: Some(String::new()),
            url: Some("u.gif".into()),
            ..PostRecord::default()
        };
        assert_eq!(render_template("[{templ_title}]", &post), "[Top Post]");
        assert_eq!(display_title(&post), DEFAULT_TITLE);
    }

    #[test]
    fn missing_url_renders_empty() {
        let post = make_post("T", None, 1);
        assert_eq!(render_template("<{templ_image}>", &post), "<>");
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        let post = make_post("T", Some("u.png"), 1);
        assert_eq!(render_template("static {other}", &post), "static {other}");
    }

    #[test]
    fn render_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("README.template.md");
        let output = dir.path().join("README.md");
        fs::write(&template, "{templ_title} / {templ_image}").unwrap();

        render(&make_post("Cat Meme", Some("http://x/a.jpg"), 10), &template, &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "Cat Meme / http://x/a.jpg");
    }

    #[test]
    fn render_overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("t.md");
        let output = dir.path().join("out.md");
        fs::write(&template, "{templ_title}").unwrap();
        fs::write(&output, "a much longer previous document that must disappear").unwrap();

        render(&make_post("new", None, 1), &template, &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "new");
    }

    #[test]
    fn render_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("t.md");
        let output = dir.path().join("out.md");
        fs::write(&template, "# {templ_title}\n\n![meme]({templ_image})\n").unwrap();
        let post = make_post("Same", Some("https://i/s.png"), 3);

        render(&post, &template, &output).unwrap();
        let first = fs::read(&output).unwrap();
        render(&post, &template, &output).unwrap();
        let second = fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn missing_template_is_read_error_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("absent.md");
        let output = dir.path().join("out.md");

        let err = render(&make_post("T", None, 1), &template, &output).unwrap_err();

        assert!(matches!(err, RenderError::ReadTemplate { ref path, .. } if path == &template));
        assert!(!output.exists());
    }

    #[test]
    fn unwritable_output_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("t.md");
        fs::write(&template, "{templ_title}").unwrap();
        let output = dir.path().join("no-such-dir").join("out.md");

        let err = render(&make_post("T", None, 1), &template, &output).unwrap_err();

        assert!(matches!(err, RenderError::WriteOutput { ref path, .. } if path == &output));
    }
}

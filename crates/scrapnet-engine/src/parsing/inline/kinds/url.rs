use std::sync::LazyLock;

use regex::Regex;

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid url regex"));
static URL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("valid url token regex"));
static GYAZO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(?:[\w-]+\.)*gyazo\.com/").expect("valid gyazo regex")
});
static IMAGE_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(?:png|jpe?g|gif|svg|webp|bmp)$").expect("valid extension regex")
});
static LOCAL_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?:\.\.?/)?{}/\S+$",
        regex::escape(Url::LOCAL_IMAGE_DIR)
    ))
    .expect("valid local image regex")
});

/// URL recognition for bracket interiors.
pub struct Url;

impl Url {
    /// Directory that already-localized images live under.
    pub const LOCAL_IMAGE_DIR: &'static str = "images";

    /// First `http(s)://` substring of `s`.
    pub fn find(s: &str) -> Option<&str> {
        URL.find(s).map(|m| m.as_str())
    }

    /// Whether the whole of `s` is a single URL.
    pub fn is_token(s: &str) -> bool {
        URL_TOKEN.is_match(s)
    }

    /// Relative path of an image that has already been downloaded.
    pub fn is_local_image_path(s: &str) -> bool {
        LOCAL_IMAGE.is_match(s)
    }

    /// Gyazo host, image file extension, or localized image path.
    pub fn is_image(s: &str) -> bool {
        GYAZO.is_match(s) || IMAGE_EXTENSION.is_match(s) || Self::is_local_image_path(s)
    }
}

pub const SITE_NAME: &str = "Quill";

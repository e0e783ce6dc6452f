//! Display options for the generated LaTeX

/// Host platform, as far as font defaults are concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::Other
        }
    }
}

/// Japanese font that ships with the platform.
pub fn default_font(platform: Platform) -> &'static str {
    match platform {
        Platform::Windows => "Meiryo",
        Platform::MacOs => "Hiragino Kaku Gothic Pro W3",
        Platform::Linux | Platform::Other => "IPAPGothic",
    }
}

pub const DEFAULT_DOC_CLASS: &str = "standalone";
pub const DEFAULT_DEP_OPT: &str = "theme = simple";
pub const DEFAULT_DEPTEXT_OPT: &str = "column sep=1em";

/// Style options substituted into every rendered document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    /// Argument of `\documentclass`
    pub doc_class: String,
    /// Argument of `\setjamainfont`
    pub font: String,
    /// Options of the `dependency` environment
    pub dep_opt: String,
    /// Options of the `deptext` environment
    pub deptext_opt: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::for_platform(Platform::current())
    }
}

impl StyleConfig {
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            doc_class: DEFAULT_DOC_CLASS.to_string(),
            font: default_font(platform).to_string(),
            dep_opt: DEFAULT_DEP_OPT.to_string(),
            deptext_opt: DEFAULT_DEPTEXT_OPT.to_string(),
        }
    }

    pub fn with_doc_class(mut self, doc_class: impl Into<String>) -> Self {
        self.doc_class = doc_class.into();
        self
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    pub fn with_dep_opt(mut self, dep_opt: impl Into<String>) -> Self {
        self.dep_opt = dep_opt.into();
        self
    }

    pub fn with_deptext_opt(mut self, deptext_opt: impl Into<String>) -> Self {
        self.deptext_opt = deptext_opt.into();
        self
    }
}

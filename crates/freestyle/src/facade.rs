//! The configured entry point to freestyle.

use freestyle_core::config::{Clock, FreestyleConfig, SystemClock};
use freestyle_core::{Error, Result};
use freestyle_dom::StyleHost;

/// Configured access to the freestyle entry points.
///
/// The pure transforms are free functions and need no setup. `Freestyle`
/// adds the parts that depend on configuration or the outside world:
/// the reported version, generated injection ids, error reporting through
/// `tracing`, and injection into a [`StyleHost`].
///
/// # Example
///
/// ```
/// use freestyle::Freestyle;
/// use freestyle::config::{FixedClock, FreestyleConfig};
/// use freestyle::dom::MemoryDocument;
///
/// let freestyle = Freestyle::with_clock(FreestyleConfig::default(), FixedClock(42));
/// let mut document = MemoryDocument::new();
///
/// let scoped = freestyle.scoped_css("a { color: red; }", "#app", true)?;
/// freestyle.inject_css(&mut document, &scoped, None, None)?;
///
/// assert!(document.to_html().contains(r#"id="__freefall-injection-42""#));
/// # Ok::<(), freestyle::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Freestyle<C: Clock = SystemClock> {
    config: FreestyleConfig,
    clock: C,
}

impl Default for Freestyle {
    fn default() -> Self {
        Self::new()
    }
}

impl Freestyle {
    /// Create with the default configuration and the system clock.
    pub fn new() -> Self {
        Self::from_config(FreestyleConfig::default())
    }

    /// Create with the given configuration and the system clock.
    pub fn from_config(config: FreestyleConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Create from TOML configuration text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(Self::from_config(FreestyleConfig::from_toml_str(text)?))
    }
}

impl<C: Clock> Freestyle<C> {
    /// Create with the given configuration and clock.
    pub fn with_clock(config: FreestyleConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// The active configuration.
    pub fn config(&self) -> &FreestyleConfig {
        &self.config
    }

    /// The configured library version.
    pub fn version(&self) -> &str {
        &self.config.version
    }

    /// Generate an id for an injected style element.
    pub fn generate_tag_id(&self) -> String {
        self.config.tag_id(&self.clock)
    }

    /// Report `err` and return its CSS comment sentinel.
    ///
    /// The sentinel is logged at `error` level.
    pub fn error(&self, err: &Error) -> String {
        let message = err.sentinel();
        tracing::error!("{}", message);
        message
    }

    /// Scope `css` under `scope`, reporting failures.
    ///
    /// Same as [`freestyle_core::scope::scoped_css`], except that errors are also logged
    /// through [`Freestyle::error`].
    pub fn scoped_css(&self, css: &str, scope: &str, ugly: bool) -> Result<String> {
        freestyle_core::scope::scoped_css(css, scope, ugly).inspect_err(|err| {
            self.error(err);
        })
    }

    /// Scope `css` under `scope`, returning the error sentinel on failure.
    ///
    /// For callers that splice the result straight into a stylesheet and
    /// want a harmless comment in place of the failed output.
    pub fn scoped_css_or_sentinel(&self, css: &str, scope: &str, ugly: bool) -> String {
        self.scoped_css(css, scope, ugly)
            .unwrap_or_else(|err| err.sentinel())
    }

    /// Inject `css` into `host` as a `style` element.
    ///
    /// Without `id`, or with an empty one, a fresh id comes from
    /// [`Freestyle::generate_tag_id`].
    /// Without `append_to` the element goes under the first element named by
    /// the configured `default_parent_tag`, then the first `head`, then the
    /// document root.
    pub fn inject_css<H: StyleHost>(
        &self,
        host: &mut H,
        css: &str,
        id: Option<&str>,
        append_to: Option<H::Node>,
    ) -> Result<H::Node> {
        let id = match id {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => self.generate_tag_id(),
        };
        let append_to = append_to.or_else(|| {
            host.get_elements_by_tag_name(&self.config.default_parent_tag)
                .into_iter()
                .next()
        });

        freestyle_dom::inject_css(host, css, &id, append_to).inspect_err(|err| {
            self.error(err);
        })
    }

    /// Remove the injected `style` element with the given id.
    pub fn remove_injection<H: StyleHost>(&self, host: &mut H, id: &str) -> bool {
        freestyle_dom::remove_injection(host, id)
    }
}

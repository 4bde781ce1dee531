use switcher_models::{OptionDescriptor, SwitcherOptions};
use std::fmt::Write;

const OPTION_CLASS: &str = "switch-option";
const ACTIVE_OPTION_CLASS: &str = "switch-option switch-option--active";

/// Renders one switcher link; the active one gets the active class instead of the plain one
pub fn render_option(option: &OptionDescriptor) -> String {
    let class = if option.is_active {
        ACTIVE_OPTION_CLASS
    } else {
        OPTION_CLASS
    };

    format!(
        r#"<div><a href="{}" class="{}"><span>{}</span></a></div>"#,
        escape_html(&option.href),
        class,
        escape_html(&option.title)
    )
}

/// Renders both links, Latest first
pub fn render_switcher(options: &SwitcherOptions) -> String {
    let mut html = String::from(r#"<nav class="version-switcher">"#);
    for option in options.iter() {
        html.push_str(&render_option(option));
    }
    html.push_str("</nav>");
    html
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c if c.is_control() => {
                let _ = write!(escaped, "&#{};", c as u32);
            }
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(title: &str, href: &str, is_active: bool) -> OptionDescriptor {
        OptionDescriptor {
            title: title.to_string(),
            href: href.to_string(),
            is_active,
        }
    }

    #[test]
    fn test_active_option() {
        let html = render_option(&option("Latest", "/ui/q/framework/react/", true));

        assert_eq!(
            html,
            r#"<div><a href="/ui/q/framework/react/" class="switch-option switch-option--active"><span>Latest</span></a></div>"#
        );
    }

    #[test]
    fn test_inactive_option() {
        let html = render_option(&option("Legacy", "/ui-legacy/q/framework", false));

        assert!(html.contains(r#"class="switch-option""#));
        assert!(!html.contains("switch-option--active"));
    }

    #[test]
    fn test_href_is_escaped() {
        let html = render_option(&option("Legacy", r#"/ui-legacy/q/framework/"><script>"#, false));

        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_switcher_order() {
        let options = SwitcherOptions {
            left: option("Latest", "/ui/q/framework/vue/", false),
            right: option("Legacy", "/ui-legacy/q/framework/vue/", true),
        };

        let html = render_switcher(&options);

        assert!(html.starts_with(r#"<nav class="version-switcher">"#));
        assert!(html.find("Latest").unwrap() < html.find("Legacy").unwrap());
        assert_eq!(html.matches("switch-option--active").count(), 1);
    }
}

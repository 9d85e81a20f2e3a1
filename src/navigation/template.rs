//! Placeholder page that renders a text template from history state.

use futures_util::future::BoxFuture;
use futures_util::FutureExt;

use crate::navigation::page::{Page, PageFactory, PageParams};
use crate::navigation::types::{Element, NavigationResult};
use crate::routing::types::StateMap;

/// Renders `template`, replacing each `{key}` with the matching state value.
///
/// Placeholders with no state value are left untouched.
#[derive(Debug, Clone)]
pub struct TemplatePage {
    template: String,
    state: StateMap,
}

impl TemplatePage {
    pub fn new(template: impl Into<String>, params: PageParams) -> Self {
        Self {
            template: template.into(),
            state: params.state_history,
        }
    }

    /// Factory building a `TemplatePage` for `template` on every navigation.
    pub fn factory(template: impl Into<String>) -> PageFactory {
        let template = template.into();
        PageFactory::simple(move |params| TemplatePage::new(template.clone(), params))
    }

    /// Single pass over the template; substituted values are never re-scanned.
    pub fn render(&self) -> String {
        let mut markup = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(open) = rest.find('{') {
            markup.push_str(&rest[..open]);
            let tail = &rest[open + 1..];

            let substitution = tail.find('}').and_then(|close| {
                let key = &tail[..close];
                if key.contains('{') {
                    return None;
                }
                self.state.get(key).map(|value| (value, close))
            });

            match substitution {
                Some((value, close)) => {
                    markup.push_str(value);
                    rest = &tail[close + 1..];
                }
                None => {
                    markup.push('{');
                    rest = tail;
                }
            }
        }

        markup.push_str(rest);
        markup
    }
}

impl Page for TemplatePage {
    fn to_html(&mut self) -> BoxFuture<'_, NavigationResult<Element>> {
        let markup = self.render();
        async move { Ok(Element::new(markup)) }.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::handle::RouterHandle;
    use crate::routing::router::RouteTable;
    use arc_swap::ArcSwap;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn params(pairs: &[(&str, &str)]) -> PageParams {
        let (tx, _rx) = mpsc::unbounded_channel();
        PageParams {
            state_history: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            router: RouterHandle::new(tx, Arc::new(ArcSwap::from_pointee(RouteTable::default()))),
        }
    }

    #[test]
    fn test_render_substitutes_state() {
        let page = TemplatePage::new(
            "<h1>{name} {surname}</h1>",
            params(&[("name", "Ikrom"), ("surname", "Murodov")]),
        );
        assert_eq!(page.render(), "<h1>Ikrom Murodov</h1>");
    }

    #[test]
    fn test_render_keeps_unknown_placeholders() {
        let page = TemplatePage::new("<p>{missing}</p>", params(&[]));
        assert_eq!(page.render(), "<p>{missing}</p>");
    }

    #[test]
    fn test_render_does_not_expand_substituted_values() {
        let page = TemplatePage::new(
            "<h1>{name}</h1><p>{tab}</p>",
            params(&[("name", "{tab}"), ("tab", "posts")]),
        );
        for _ in 0..50 {
            assert_eq!(page.render(), "<h1>{tab}</h1><p>posts</p>");
        }
    }

    #[test]
    fn test_render_nested_braces() {
        let page = TemplatePage::new("{a{id}} {", params(&[("id", "7")]));
        assert_eq!(page.render(), "{a7} {");
    }

    #[tokio::test]
    async fn test_to_html() {
        let mut page = TemplatePage::new("<p>{id}</p>", params(&[("id", "9")]));
        let element = page.to_html().await.unwrap();
        assert_eq!(element.markup, "<p>9</p>");
    }
}

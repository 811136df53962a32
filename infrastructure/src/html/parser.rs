//! [`PageParser`] implementation on top of `scraper`
//!
//! The quiz container is walked in document order and flattened into
//! [`QuizNode`]s; only direct `p` children of the container count as
//! question markers, nested paragraphs are ignored.

use crate::config::FileSelectorsConfig;
use farlex_application::{PageParseError, PageParser};
use farlex_domain::{PageId, QuizNode, Section};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

/// Index of the link container among the direct `div` children of `#toc<n>`
const LINK_CONTAINER_INDEX: usize = 1;

/// Markup parser configured with the site's quiz selectors
#[derive(Debug, Clone)]
pub struct ScraperPageParser {
    quiz_container: Selector,
    correct_class: String,
    links: Selector,
}

impl ScraperPageParser {
    pub fn new(selectors: &FileSelectorsConfig) -> Result<Self, PageParseError> {
        Ok(Self {
            quiz_container: parse_selector(&selectors.quiz_container)?,
            correct_class: selectors.correct_class.trim().to_string(),
            links: parse_selector("a")?,
        })
    }

    fn flatten(&self, container: ElementRef<'_>, nodes: &mut Vec<QuizNode>) {
        for node in container.descendants() {
            let Some(element) = ElementRef::wrap(node) else {
                continue;
            };
            let value = element.value();
            match value.name() {
                "p" if element
                    .parent()
                    .is_some_and(|parent| parent.id() == container.id()) =>
                {
                    nodes.push(QuizNode::marker(text_of(element)));
                }
                "input" if value.attr("type").is_some_and(is_radio) => {
                    let correct = value.classes().any(|class| class == self.correct_class);
                    nodes.push(QuizNode::radio(correct));
                }
                "label" => nodes.push(QuizNode::label(text_of(element))),
                _ => {}
            }
        }
    }
}

impl PageParser for ScraperPageParser {
    fn quiz_nodes(&self, html: &str) -> Vec<QuizNode> {
        let document = Html::parse_document(html);
        let mut nodes = Vec::new();
        for container in document.select(&self.quiz_container) {
            self.flatten(container, &mut nodes);
        }
        debug!("Flattened quiz region into {} nodes", nodes.len());
        nodes
    }

    fn section_pages(
        &self,
        contents_html: &str,
        section: Section,
    ) -> Result<Vec<PageId>, PageParseError> {
        let document = Html::parse_document(contents_html);
        let container_selector = format!("{} > div", section.contents_selector());
        let divs = parse_selector(&container_selector)?;

        let container = document
            .select(&divs)
            .nth(LINK_CONTAINER_INDEX)
            .ok_or_else(|| PageParseError::MissingElement {
                selector: container_selector.clone(),
            })?;

        let mut pages = Vec::new();
        for link in container.select(&self.links) {
            let Some(href) = link.value().attr("href") else {
                warn!("Skipping link without href in {}", section);
                continue;
            };
            match PageId::from_href(href) {
                Ok(page) => pages.push(page),
                Err(e) => warn!("Skipping link in {}: {}", section, e),
            }
        }
        Ok(pages)
    }

    fn section_title(
        &self,
        contents_html: &str,
        section: Section,
    ) -> Result<String, PageParseError> {
        let document = Html::parse_document(contents_html);
        let tab_selector = section.tab_selector();
        let tab = parse_selector(&tab_selector)?;

        document
            .select(&tab)
            .next()
            .map(|element| text_of(element).trim().to_string())
            .ok_or(PageParseError::MissingElement {
                selector: tab_selector,
            })
    }
}

fn parse_selector(selector: &str) -> Result<Selector, PageParseError> {
    Selector::parse(selector).map_err(|e| PageParseError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

fn is_radio(input_type: &str) -> bool {
    input_type.eq_ignore_ascii_case("radio")
}

/// Concatenated text of an element and all of its descendants
fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

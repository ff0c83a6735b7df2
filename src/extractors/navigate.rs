// src/extractors/navigate.rs

// --- Imports ---
use scraper::ElementRef;

/// Pseudo-attribute name matched against an element's own text instead of
/// a real attribute (mirrors locating a heading by its visible label).
pub const TEXT: &str = "text";

/// The closed set of tree-traversal operations a navigation step may perform.
/// `Find`, `NextSibling`, `Parent` and `FirstChild` yield at most one node;
/// `FindAll`, `NextSiblings` and `Children` yield an ordered node list and
/// terminate the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOp {
    Find,
    FindAll,
    NextSibling,
    NextSiblings,
    Parent,
    Children,
    FirstChild,
}

/// How a single attribute (or the element text) must look for a candidate
/// element to match a step.
#[derive(Debug, Clone)]
pub enum AttrMatcher {
    /// Attribute value must equal the given string. For `class` this means
    /// the class list must contain the value; for `text` the element's
    /// trimmed text must equal it.
    Equals(&'static str),
    /// Attribute value (or element text) is handed to the predicate.
    Predicate(fn(Option<&str>) -> bool),
    /// The attribute must not be present at all.
    Absent,
}

/// One declarative tree-traversal step: an operation, an optional tag-name
/// filter, and any number of attribute matchers. Built via the `find`/
/// `next_sibling`/... constructors plus the chained matcher methods.
#[derive(Debug, Clone)]
pub struct NavigationStep {
    op: StepOp,
    tag: Option<&'static str>,
    attrs: Vec<(&'static str, AttrMatcher)>,
}

impl NavigationStep {
    fn new(op: StepOp, tag: &'static str) -> Self {
        Self {
            op,
            tag: Some(tag),
            attrs: Vec::new(),
        }
    }

    pub fn find(tag: &'static str) -> Self {
        Self::new(StepOp::Find, tag)
    }

    pub fn find_all(tag: &'static str) -> Self {
        Self::new(StepOp::FindAll, tag)
    }

    pub fn next_sibling(tag: &'static str) -> Self {
        Self::new(StepOp::NextSibling, tag)
    }

    pub fn next_siblings(tag: &'static str) -> Self {
        Self::new(StepOp::NextSiblings, tag)
    }

    pub fn parent(tag: &'static str) -> Self {
        Self::new(StepOp::Parent, tag)
    }

    pub fn children(tag: &'static str) -> Self {
        Self::new(StepOp::Children, tag)
    }

    pub fn first_child(tag: &'static str) -> Self {
        Self::new(StepOp::FirstChild, tag)
    }

    pub fn op(&self) -> StepOp {
        self.op
    }

    /// Require an attribute to equal a value exactly.
    pub fn attr(mut self, name: &'static str, value: &'static str) -> Self {
        self.attrs.push((name, AttrMatcher::Equals(value)));
        self
    }

    /// Require the class list to contain the given class.
    pub fn class_name(self, value: &'static str) -> Self {
        self.attr("class", value)
    }

    /// Require the element's trimmed text to equal the given string.
    pub fn text_equals(self, value: &'static str) -> Self {
        self.attr(TEXT, value)
    }

    /// Match the element's trimmed text against a predicate.
    pub fn text_matches(mut self, pred: fn(Option<&str>) -> bool) -> Self {
        self.attrs.push((TEXT, AttrMatcher::Predicate(pred)));
        self
    }

    /// Require an attribute to be absent (disambiguates near-identical tags).
    pub fn without_attr(mut self, name: &'static str) -> Self {
        self.attrs.push((name, AttrMatcher::Absent));
        self
    }

    /// Whether a candidate element satisfies this step's tag and matchers.
    fn matches(&self, el: ElementRef) -> bool {
        if let Some(tag) = self.tag {
            if el.value().name() != tag {
                return false;
            }
        }
        for (name, matcher) in &self.attrs {
            let ok = match (*name, matcher) {
                (TEXT, AttrMatcher::Equals(want)) => {
                    let text: String = el.text().collect();
                    text.trim() == *want
                }
                (TEXT, AttrMatcher::Predicate(pred)) => {
                    let text: String = el.text().collect();
                    pred(Some(text.trim()))
                }
                (TEXT, AttrMatcher::Absent) => el.text().next().is_none(),
                ("class", AttrMatcher::Equals(want)) => {
                    el.value().classes().any(|c| c == *want)
                }
                (attr, AttrMatcher::Equals(want)) => el.value().attr(attr) == Some(*want),
                (attr, AttrMatcher::Predicate(pred)) => pred(el.value().attr(attr)),
                (attr, AttrMatcher::Absent) => el.value().attr(attr).is_none(),
            };
            if !ok {
                return false;
            }
        }
        true
    }
}

/// The result of running a navigation chain: a single node, an ordered node
/// list, or a first-class "not found". Absence is expected, not an error —
/// many schema entries are legitimately optional per document variant.
#[derive(Debug, Clone)]
pub enum Located<'a> {
    Node(ElementRef<'a>),
    Nodes(Vec<ElementRef<'a>>),
    Absent,
}

impl<'a> Located<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Located::Absent)
    }
}

/// Applies a step sequence to `root`, strictly left-to-right. Each step's
/// output becomes the next step's input; any step that yields nothing
/// short-circuits the whole chain to `Absent`. The first step must be a
/// `Find` — it anchors the chain inside the document.
pub fn apply<'a>(root: ElementRef<'a>, steps: &[NavigationStep]) -> Located<'a> {
    let Some((anchor, rest)) = steps.split_first() else {
        return Located::Absent;
    };
    if anchor.op != StepOp::Find {
        tracing::warn!(
            "Navigation chain must be anchored by a find step, got {:?}",
            anchor.op
        );
        return Located::Absent;
    }

    let mut current = match find_descendant(root, anchor) {
        Some(el) => el,
        None => return Located::Absent,
    };

    for (idx, step) in rest.iter().enumerate() {
        let next = match step.op {
            StepOp::Find | StepOp::FirstChild => find_descendant(current, step),
            StepOp::NextSibling => current
                .next_siblings()
                .filter_map(ElementRef::wrap)
                .find(|el| step.matches(*el)),
            StepOp::Parent => current
                .ancestors()
                .filter_map(ElementRef::wrap)
                .find(|el| step.matches(*el)),
            StepOp::FindAll | StepOp::Children => {
                let nodes: Vec<ElementRef> = descendants(current)
                    .filter(|el| step.matches(*el))
                    .collect();
                return finish_list(nodes, rest.len() - idx - 1);
            }
            StepOp::NextSiblings => {
                let nodes: Vec<ElementRef> = current
                    .next_siblings()
                    .filter_map(ElementRef::wrap)
                    .filter(|el| step.matches(*el))
                    .collect();
                return finish_list(nodes, rest.len() - idx - 1);
            }
        };
        current = match next {
            Some(el) => el,
            None => return Located::Absent,
        };
    }

    Located::Node(current)
}

/// First matching descendant of `el` in document order (excluding `el`).
fn find_descendant<'a>(el: ElementRef<'a>, step: &NavigationStep) -> Option<ElementRef<'a>> {
    descendants(el).find(|candidate| step.matches(*candidate))
}

fn descendants<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// A multi-node step terminates the chain; an empty result is an ordinary
/// miss. Trailing steps indicate a malformed schema and are ignored.
fn finish_list(nodes: Vec<ElementRef>, trailing_steps: usize) -> Located {
    if trailing_steps > 0 {
        tracing::warn!(
            "Ignoring {} step(s) after a multi-node operation; multi-node steps end the chain",
            trailing_steps
        );
    }
    if nodes.is_empty() {
        Located::Absent
    } else {
        Located::Nodes(nodes)
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn root(doc: &Html) -> ElementRef {
        doc.root_element()
    }

    #[test]
    fn find_anchors_on_tag_and_attribute() {
        let doc = Html::parse_document(
            r#"<body><h3 id="prices">Prices</h3><h3 id="imports">Imports</h3></body>"#,
        );
        let steps = vec![NavigationStep::find("h3").attr("id", "imports")];
        match apply(root(&doc), &steps) {
            Located::Node(el) => {
                assert_eq!(el.text().collect::<String>(), "Imports");
            }
            other => panic!("expected single node, got {:?}", other),
        }
    }

    #[test]
    fn class_matcher_accepts_multi_class_elements() {
        let doc = Html::parse_document(
            r#"<body><h3 class="big text-center">Headline Figure</h3></body>"#,
        );
        let steps = vec![NavigationStep::find("h3").class_name("text-center")];
        assert!(matches!(apply(root(&doc), &steps), Located::Node(_)));
    }

    #[test]
    fn sibling_chain_walks_past_non_matching_nodes() {
        let doc = Html::parse_document(
            r#"<body>
                <h3 id="commodities">Commodities</h3>
                text in between
                <span>skip me</span>
                <div><p>Up in Price</p></div>
                <div><p>Down in Price</p></div>
            </body>"#,
        );
        let steps = vec![
            NavigationStep::find("h3").attr("id", "commodities"),
            NavigationStep::next_sibling("div"),
            NavigationStep::next_sibling("div"),
            NavigationStep::first_child("p"),
        ];
        match apply(root(&doc), &steps) {
            Located::Node(el) => assert_eq!(el.text().collect::<String>(), "Down in Price"),
            other => panic!("expected single node, got {:?}", other),
        }
    }

    #[test]
    fn next_siblings_collects_all_following_matches() {
        let doc = Html::parse_document(
            r#"<body>
                <h3 id="production">Production</h3>
                <p>First paragraph.</p>
                <table><tr><td>x</td></tr></table>
                <p>Second paragraph.</p>
            </body>"#,
        );
        let steps = vec![
            NavigationStep::find("h3").attr("id", "production"),
            NavigationStep::next_siblings("p"),
        ];
        match apply(root(&doc), &steps) {
            Located::Nodes(nodes) => assert_eq!(nodes.len(), 2),
            other => panic!("expected node list, got {:?}", other),
        }
    }

    #[test]
    fn find_all_collects_matching_descendants() {
        let doc = Html::parse_document(
            r#"<body>
                <div id="summaries">
                    <div><p>Business Activity grew.</p></div>
                    <div><p>New Orders grew.</p></div>
                </div>
            </body>"#,
        );
        let steps = vec![
            NavigationStep::find("div").attr("id", "summaries"),
            NavigationStep::find_all("p"),
        ];
        match apply(root(&doc), &steps) {
            Located::Nodes(nodes) => assert_eq!(nodes.len(), 2),
            other => panic!("expected node list, got {:?}", other),
        }
    }

    #[test]
    fn parent_step_climbs_to_enclosing_container() {
        let doc = Html::parse_document(
            r#"<body>
                <div class="wrapper"><h3 id="buyingPolicy">Buying Policy</h3></div>
                <p>After the wrapper.</p>
            </body>"#,
        );
        let steps = vec![
            NavigationStep::find("h3").attr("id", "buyingPolicy"),
            NavigationStep::parent("div"),
            NavigationStep::next_siblings("p"),
        ];
        match apply(root(&doc), &steps) {
            Located::Nodes(nodes) => {
                assert_eq!(nodes[0].text().collect::<String>(), "After the wrapper.");
            }
            other => panic!("expected node list, got {:?}", other),
        }
    }

    #[test]
    fn text_equality_matcher_selects_by_visible_label() {
        let doc = Html::parse_document(
            r#"<body><h3>Prices</h3><h3>New Orders</h3><p>body</p></body>"#,
        );
        let steps = vec![NavigationStep::find("h3").text_equals("New Orders")];
        match apply(root(&doc), &steps) {
            Located::Node(el) => assert_eq!(el.text().collect::<String>(), "New Orders"),
            other => panic!("expected single node, got {:?}", other),
        }
    }

    #[test]
    fn text_predicate_matcher_runs_against_element_text() {
        fn has_summary(text: Option<&str>) -> bool {
            text.map_or(false, |t| t.contains("INDEX SUMMARIES"))
        }
        let doc = Html::parse_document(
            r#"<body><h3>SERVICES INDEX SUMMARIES (July)</h3></body>"#,
        );
        let steps = vec![NavigationStep::find("h3").text_matches(has_summary)];
        assert!(matches!(apply(root(&doc), &steps), Located::Node(_)));
    }

    #[test]
    fn absent_attribute_matcher_skips_decorated_elements() {
        let doc = Html::parse_document(
            r#"<body>
                <h3 class="text-center">Heading</h3>
                <p class="disclaimer">fine print</p>
                <p>Real overview paragraph.</p>
            </body>"#,
        );
        let steps = vec![
            NavigationStep::find("h3").class_name("text-center"),
            NavigationStep::next_siblings("p").without_attr("class"),
        ];
        match apply(root(&doc), &steps) {
            Located::Nodes(nodes) => {
                assert_eq!(nodes.len(), 1);
                assert_eq!(
                    nodes[0].text().collect::<String>(),
                    "Real overview paragraph."
                );
            }
            other => panic!("expected node list, got {:?}", other),
        }
    }

    #[test]
    fn any_failing_step_short_circuits_to_absent() {
        let doc = Html::parse_document(r#"<body><h3 id="prices">Prices</h3></body>"#);
        let steps = vec![
            NavigationStep::find("h3").attr("id", "prices"),
            NavigationStep::next_sibling("table"),
            NavigationStep::first_child("td"),
        ];
        assert!(apply(root(&doc), &steps).is_absent());
    }

    #[test]
    fn chain_not_anchored_by_find_is_absent() {
        let doc = Html::parse_document(r#"<body><p>text</p></body>"#);
        let steps = vec![NavigationStep::next_siblings("p")];
        assert!(apply(root(&doc), &steps).is_absent());
    }

    #[test]
    fn empty_multi_node_result_is_absent() {
        let doc = Html::parse_document(r#"<body><h3 id="imports">Imports</h3></body>"#);
        let steps = vec![
            NavigationStep::find("h3").attr("id", "imports"),
            NavigationStep::next_siblings("table"),
        ];
        assert!(apply(root(&doc), &steps).is_absent());
    }
}

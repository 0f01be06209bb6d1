use crate::style::{parse_transitions, split_number, transition_for, Declared};
use scroll_config::{ButtonsConfig, HostLayout, PageConfig};
use scroll_core::{Rect, Result, ScrollError};
use scroll_metrics::{format_px, PlatformMetrics};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Index of a node in its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// The document both button surfaces write into.
pub type SharedDocument = Rc<RefCell<Document>>;

#[derive(Debug)]
struct Node {
    tag:      String,
    id:       Option<String>,
    children: Vec<NodeId>,
    /// Stylesheet values; never animated.
    sheet:    HashMap<String, String>,
    /// Inline values, keyed by property.
    inline:   HashMap<String, Declared>,
    /// Source for nodes built from markup.
    markup:   Option<String>,
}

/// A flat arena of nodes plus the page-wide state around them.
#[derive(Debug)]
pub struct Document {
    now:          Instant,
    inner_width:  u32,
    inner_height: u32,
    client_width: u32,
    root:         BTreeMap<String, String>,
    nodes:        Vec<Node>,
}

impl Document {
    /// An empty page of `inner_width`×`inner_height` whose vertical
    /// scrollbar takes `scrollbar_width` px of the width.
    pub fn new(inner_width: u32, inner_height: u32, scrollbar_width: u32) -> Self {
        Self {
            now: Instant::now(),
            inner_width,
            inner_height,
            client_width: inner_width.saturating_sub(scrollbar_width),
            root: BTreeMap::new(),
            nodes: Vec::new(),
        }
    }

    /// Build the page described by the config: one fixed host per button.
    pub fn from_config(page: &PageConfig, buttons: &ButtonsConfig) -> Self {
        let mut doc = Self::new(page.width, page.height, page.scrollbar_width);
        doc.add_host(&buttons.top, page.top);
        doc.add_host(&buttons.bottom, page.bottom);
        doc
    }

    pub fn shared(self) -> SharedDocument {
        Rc::new(RefCell::new(self))
    }

    // ── Clock ─────────────────────────────────────────────────────────────────

    pub fn now(&self) -> Instant {
        self.now
    }

    /// Move the document clock to `now`; earlier instants are ignored.
    pub fn set_now(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// Whether any inline value is still mid-transition.
    pub fn is_animating(&self) -> bool {
        self.nodes
            .iter()
            .flat_map(|n| n.inline.values())
            .any(|d| d.is_running(self.now))
    }

    // ── Tree ──────────────────────────────────────────────────────────────────

    /// Add a top-level, fixed-position element.
    pub fn add_host(&mut self, id: &str, layout: HostLayout) -> NodeId {
        let host = self.push(Node::new("div", Some(id)));
        let sheet = &mut self.nodes[host.0].sheet;
        sheet.insert("position".into(), "fixed".into());
        sheet.insert("right".into(), format_px(layout.right));
        sheet.insert("bottom".into(), format_px(layout.bottom));
        sheet.insert("width".into(), format!("{}px", layout.width));
        sheet.insert("height".into(), format!("{}px", layout.height));
        host
    }

    /// Create an element under `parent`.  Ids given here stay local to the
    /// subtree and are not visible to [`Document::locate`].
    pub fn append_child(&mut self, parent: NodeId, tag: &str, markup: Option<&str>) -> NodeId {
        let mut node = Node::new(tag, None);
        node.markup = markup.map(str::to_string);
        let child = self.push(node);
        self.nodes[parent.0].children.push(child);
        child
    }

    /// Attach a scoped descendant (e.g. the shape inside an icon).
    pub fn append_scoped(&mut self, parent: NodeId, tag: &str, id: &str) -> NodeId {
        let child = self.push(Node::new(tag, Some(id)));
        self.nodes[parent.0].children.push(child);
        child
    }

    /// Find a host element by id.
    pub fn locate(&self, id: &str) -> Result<NodeId> {
        self.roots()
            .find(|n| self.nodes[n.0].id.as_deref() == Some(id))
            .ok_or_else(|| ScrollError::HostNotFound(id.to_string()))
    }

    /// Find a descendant of `scope` by id.
    pub fn find_in(&self, scope: NodeId, id: &str) -> Option<NodeId> {
        let mut stack = self.nodes[scope.0].children.clone();
        stack.reverse();
        while let Some(n) = stack.pop() {
            if self.nodes[n.0].id.as_deref() == Some(id) {
                return Some(n);
            }
            stack.extend(self.nodes[n.0].children.iter().rev());
        }
        None
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    pub fn markup(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].markup.as_deref()
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    /// Declare an inline value.
    ///
    /// Animates from the currently computed value when the node's inline
    /// `transition` covers `property`; a declaration that lands mid-flight
    /// starts over from wherever the old one had got to.
    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        let now = self.now;

        if property == "transition" {
            self.nodes[node.0]
                .inline
                .insert(property.to_string(), Declared::instant(value, now));
            return;
        }

        let transitions = self.nodes[node.0]
            .inline
            .get("transition")
            .map(|d| parse_transitions(&d.to))
            .unwrap_or_default();

        let declared = match transition_for(&transitions, property) {
            Some(t) if !(t.duration.is_zero() && t.delay.is_zero()) => Declared {
                to:       value.to_string(),
                from:     self.computed(node, property),
                start:    now,
                duration: t.duration,
                delay:    t.delay,
            },
            _ => Declared::instant(value, now),
        };

        self.nodes[node.0].inline.insert(property.to_string(), declared);
    }

    /// The declared value: inline target, else stylesheet, else initial.
    pub fn specified(&self, node: NodeId, property: &str) -> Option<String> {
        let n = &self.nodes[node.0];
        n.inline
            .get(property)
            .map(|d| d.to.clone())
            .or_else(|| n.sheet.get(property).cloned())
            .or_else(|| initial(property).map(str::to_string))
    }

    /// The value on screen right now, transitions included.
    pub fn computed(&self, node: NodeId, property: &str) -> Option<String> {
        let n = &self.nodes[node.0];
        match n.inline.get(property) {
            Some(d) => Some(d.value_at(self.now)),
            None => n
                .sheet
                .get(property)
                .cloned()
                .or_else(|| initial(property).map(str::to_string)),
        }
    }

    /// Computed value as a number, with any `px` suffix dropped.
    pub fn computed_number(&self, node: NodeId, property: &str) -> Option<f32> {
        self.computed(node, property)
            .as_deref()
            .and_then(split_number)
            .map(|(n, _)| n)
    }

    /// On-screen box of a fixed host, resolved against the client area.
    pub fn layout_box(&self, host: NodeId) -> Rect {
        let px = |p: &str| self.computed_number(host, p).unwrap_or(0.0);
        let (right, bottom, width, height) = (px("right"), px("bottom"), px("width"), px("height"));
        Rect::new(
            self.client_width as f32 - right - width,
            self.inner_height as f32 - bottom - height,
            width,
            height,
        )
    }

    pub fn inner_size(&self) -> (u32, u32) {
        (self.inner_width, self.inner_height)
    }

    pub fn client_width(&self) -> u32 {
        self.client_width
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Nodes not owned by any parent, in creation order.
    fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len())
            .map(NodeId)
            .filter(|id| !self.nodes.iter().any(|n| n.children.contains(id)))
    }
}

impl Node {
    fn new(tag: &str, id: Option<&str>) -> Self {
        Self {
            tag:      tag.to_string(),
            id:       id.map(str::to_string),
            children: Vec::new(),
            sheet:    HashMap::new(),
            inline:   HashMap::new(),
            markup:   None,
        }
    }
}

fn initial(property: &str) -> Option<&'static str> {
    match property {
        "opacity" => Some("1"),
        "visibility" => Some("visible"),
        "box-shadow" => Some("none"),
        _ => None,
    }
}

impl PlatformMetrics for Document {
    fn root_property(&self, name: &str) -> Option<String> {
        self.root.get(name).cloned()
    }

    fn set_root_property(&mut self, name: &str, value: &str) {
        self.root.insert(name.to_string(), value.to_string());
    }

    fn scrollbar_width(&self) -> i32 {
        (self.inner_width - self.client_width) as i32
    }

    /// Specified (not mid-transition) value, so successive reads after a
    /// declaration see its target.
    fn property(&self, element_id: &str, name: &str) -> Option<String> {
        let node = self.locate(element_id).ok()?;
        self.specified(node, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> HostLayout {
        HostLayout { right: 16, bottom: 58, width: 58, height: 86 }
    }

    #[test]
    fn locate_finds_hosts_only() {
        let mut doc = Document::new(240, 320, 15);
        let host = doc.add_host("btn", layout());
        let svg = doc.append_child(host, "svg", None);
        doc.append_scoped(svg, "path", "svg-rect");

        assert_eq!(doc.locate("btn").unwrap(), host);
        assert!(matches!(doc.locate("svg-rect"), Err(ScrollError::HostNotFound(_))));
        assert!(doc.find_in(host, "svg-rect").is_some());
    }

    #[test]
    fn scrollbar_width_is_inner_minus_client() {
        let doc = Document::new(240, 320, 15);
        assert_eq!(doc.scrollbar_width(), 15);
        assert_eq!(doc.client_width(), 225);
    }

    #[test]
    fn property_reads_declared_target() {
        let mut doc = Document::new(240, 320, 15);
        let host = doc.add_host("btn", layout());
        doc.set_style(host, "transition", "right 300ms");
        doc.set_style(host, "right", "31px");

        assert_eq!(doc.property("btn", "right").as_deref(), Some("31px"));
        assert_eq!(doc.computed(host, "right").as_deref(), Some("16px"));
        assert!(doc.is_animating());

        doc.advance(Duration::from_millis(300));
        assert_eq!(doc.computed(host, "right").as_deref(), Some("31px"));
        assert!(!doc.is_animating());
    }

    #[test]
    fn redeclaring_mid_flight_starts_from_current_value() {
        let mut doc = Document::new(240, 320, 15);
        let host = doc.add_host("btn", layout());
        doc.set_style(host, "transition", "right 100ms");
        doc.set_style(host, "right", "116px");
        doc.advance(Duration::from_millis(50));
        doc.set_style(host, "right", "16px");

        assert_eq!(doc.computed(host, "right").as_deref(), Some("66px"));
        doc.advance(Duration::from_millis(100));
        assert_eq!(doc.computed(host, "right").as_deref(), Some("16px"));
    }

    #[test]
    fn layout_box_tracks_right_inset() {
        let mut doc = Document::new(240, 320, 15);
        let host = doc.add_host("btn", layout());
        assert_eq!(doc.layout_box(host), Rect::new(225.0 - 16.0 - 58.0, 320.0 - 58.0 - 86.0, 58.0, 86.0));

        doc.set_style(host, "right", "-69px");
        assert_eq!(doc.layout_box(host).left, 225.0 + 69.0 - 58.0);
    }

    #[test]
    fn from_config_builds_both_hosts() {
        let doc = Document::from_config(&PageConfig::default(), &ButtonsConfig::default());
        assert!(doc.locate("scroll-to-top-button").is_ok());
        assert!(doc.locate("scroll-to-bottom-button").is_ok());
    }
}

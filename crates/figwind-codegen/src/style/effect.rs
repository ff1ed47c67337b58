use figwind_core::{Classes, DesignNode};
use figwind_resolver::format_number;

use super::StyleGenerator;

impl StyleGenerator<'_> {
    pub fn effect(&self, node: &DesignNode) -> Classes {
        let mut classes = Classes::new();
        if node.opacity != 1.0 {
            classes.push(format!("opacity-[{}]", format_number(node.opacity)));
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use crate::style::test_support::Fixture;
    use figwind_core::{DesignNode, NodeKind};

    #[test]
    fn test_opacity() {
        let fixture = Fixture::new();
        let node = DesignNode::new("n", NodeKind::Unsupported);
        assert!(fixture.styles().effect(&node).is_empty());
        assert_eq!(
            fixture.styles().effect(&node.with_opacity(0.5)).to_vec(),
            vec!["opacity-[0.5]"]
        );
    }
}

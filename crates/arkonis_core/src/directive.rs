//! Directive table: the global mode's probability multipliers and flavor text.

use arkonis_data::Directive;

/// Probability multipliers applied to directive-sensitive draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modifiers {
    pub scan: f64,
    pub block: f64,
    pub replicate: f64,
    pub offense: f64,
}

pub trait DirectiveLogic {
    fn modifiers(&self) -> Modifiers;
    /// Adaptation tag stamped on every milestone unlocked under this directive.
    fn adaptation_tag(&self) -> &'static str;
    fn task_prefix(&self) -> &'static str;
}

impl DirectiveLogic for Directive {
    fn modifiers(&self) -> Modifiers {
        let (scan, block, replicate, offense) = match self {
            Directive::SilentWatch => (1.5, 0.1, 0.5, 0.0),
            Directive::ActiveDefense => (1.0, 1.0, 1.0, 0.5),
            Directive::ProtocolOmega => (2.0, 2.0, 3.0, 1.5),
            Directive::TotalRecall => (0.1, 0.1, 0.1, 0.0),
        };
        Modifiers {
            scan,
            block,
            replicate,
            offense,
        }
    }

    fn adaptation_tag(&self) -> &'static str {
        match self {
            Directive::ProtocolOmega => "OMEGA-AUGMENTED",
            Directive::SilentWatch => "STEALTH-ADAPTED",
            Directive::TotalRecall => "RECALL-MATRIX",
            Directive::ActiveDefense => "DEFENSE-OPTIMIZED",
        }
    }

    fn task_prefix(&self) -> &'static str {
        match self {
            Directive::ProtocolOmega => "Executing PROTOCOL_OMEGA directives with enhanced",
            Directive::SilentWatch => "Monitoring under SILENT_WATCH with heightened",
            Directive::TotalRecall => "Under TOTAL_RECALL, reviewing core definitions with",
            Directive::ActiveDefense => "Actively defending with dynamic",
        }
    }
}

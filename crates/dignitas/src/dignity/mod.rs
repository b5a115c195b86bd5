pub mod accidental;
pub mod essential;
pub mod report;
pub mod rules;

pub use accidental::resolve_accidental;
pub use essential::{essential_category, mutual_reception, resolve_essential, EssentialCategory, EssentialDignity};
pub use report::{aggregate, ChartScores, DignityReport, ReportBuilder};
pub use rules::{DignityRule, RuleCategory, RuleContext, RuleId};

//! Setting schema: values, choice tables, descriptors, disable rules

pub mod choices;
pub mod descriptor;
pub mod rules;
pub mod value;

pub use choices::{Choice, ChoiceSpec, ChoiceTable};
pub use descriptor::{
    ceil_log2, compute_bit_width, GuiKind, NumericRange, SettingBuilder, SettingDescriptor,
};
pub use rules::{DisableRule, DisableTargets, RuleTrigger};
pub use value::{SettingValue, ValueType};

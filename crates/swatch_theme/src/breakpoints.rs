//! Breakpoints and media query generation
//!
//! Breakpoints are named minimum widths. Queries are inclusive at the lower
//! bound; upper bounds subtract `step / 100` so adjacent ranges never overlap
//! (`md` ends at `1199.95px` when `lg` starts at `1200px`).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use swatch_color::format_number;

use crate::error::BreakpointError;

pub const DEFAULT_UNIT: &str = "px";
pub const DEFAULT_STEP: f64 = 5.0;

/// Default keys, smallest first.
pub const BREAKPOINT_KEYS: [&str; 5] = ["xs", "sm", "md", "lg", "xl"];

pub fn default_values() -> IndexMap<String, f64> {
    BREAKPOINT_KEYS
        .iter()
        .zip([0.0, 600.0, 900.0, 1200.0, 1536.0])
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Partial breakpoint configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BreakpointsOptions {
    /// Replaces the default set entirely when given.
    pub values: Option<IndexMap<String, f64>>,
    pub unit: Option<String>,
    pub step: Option<f64>,
}

/// Resolved breakpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Breakpoints {
    /// Keys ordered by ascending value.
    pub keys: Vec<String>,
    /// Values ordered by ascending value.
    pub values: IndexMap<String, f64>,
    pub unit: String,
    pub step: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::from_sorted(
            default_values().into_iter().collect(),
            DEFAULT_UNIT.to_string(),
            DEFAULT_STEP,
        )
    }
}

impl Breakpoints {
    fn from_sorted(values: Vec<(String, f64)>, unit: String, step: f64) -> Self {
        Self {
            keys: values.iter().map(|(key, _)| key.clone()).collect(),
            values: values.into_iter().collect(),
            unit,
            step,
        }
    }

    fn value(&self, key: &str) -> Result<f64, BreakpointError> {
        self.values
            .get(key)
            .copied()
            .ok_or_else(|| BreakpointError::UnknownBreakpoint(key.to_string()))
    }

    fn upper_bound(&self, key: &str) -> Result<String, BreakpointError> {
        let value = self.value(key)? - self.step / 100.0;
        Ok(format!("{}{}", format_number(value), self.unit))
    }

    /// `@media (min-width:{value}{unit})`
    pub fn up(&self, key: &str) -> Result<String, BreakpointError> {
        Ok(format!(
            "@media (min-width:{}{})",
            format_number(self.value(key)?),
            self.unit
        ))
    }

    /// `@media (max-width:{value - step/100}{unit})`
    pub fn down(&self, key: &str) -> Result<String, BreakpointError> {
        Ok(format!("@media (max-width:{})", self.upper_bound(key)?))
    }

    pub fn between(&self, start: &str, end: &str) -> Result<String, BreakpointError> {
        Ok(format!(
            "@media (min-width:{}{}) and (max-width:{})",
            format_number(self.value(start)?),
            self.unit,
            self.upper_bound(end)?
        ))
    }

    /// The range from `key` up to the next breakpoint, or [`up`](Self::up)
    /// for the largest one.
    pub fn only(&self, key: &str) -> Result<String, BreakpointError> {
        let index = self.index_of(key)?;
        match self.keys.get(index + 1) {
            Some(next) => self.between(key, next),
            None => self.up(key),
        }
    }

    /// Everything outside [`only`](Self::only).
    pub fn not(&self, key: &str) -> Result<String, BreakpointError> {
        let index = self.index_of(key)?;
        if index == 0 {
            return match self.keys.get(1) {
                Some(next) => self.up(next),
                None => Ok("@media not all".to_string()),
            };
        }
        if index == self.keys.len() - 1 {
            return self.down(key);
        }
        Ok(self
            .between(key, &self.keys[index + 1])?
            .replacen("@media", "@media not all and", 1))
    }

    fn index_of(&self, key: &str) -> Result<usize, BreakpointError> {
        self.keys
            .iter()
            .position(|k| k == key)
            .ok_or_else(|| BreakpointError::UnknownBreakpoint(key.to_string()))
    }
}

/// Resolve breakpoint options. Keys are ordered by value regardless of input order.
///
/// Every value must be a finite, non-negative width.
pub fn create_breakpoints(options: &BreakpointsOptions) -> Result<Breakpoints, BreakpointError> {
    let mut values: Vec<(String, f64)> = options
        .values
        .clone()
        .unwrap_or_else(default_values)
        .into_iter()
        .collect();

    if let Some((key, value)) = values
        .iter()
        .find(|(_, value)| !value.is_finite() || *value < 0.0)
    {
        return Err(BreakpointError::InvalidValue {
            key: key.clone(),
            value: *value,
        });
    }
    values.sort_by(|a, b| a.1.total_cmp(&b.1));

    Ok(Breakpoints::from_sorted(
        values,
        options
            .unit
            .clone()
            .unwrap_or_else(|| DEFAULT_UNIT.to_string()),
        options.step.unwrap_or(DEFAULT_STEP),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Breakpoints {
        create_breakpoints(&BreakpointsOptions::default()).unwrap()
    }

    #[test]
    fn up_and_down() {
        let bp = defaults();
        assert_eq!(bp.up("md").unwrap(), "@media (min-width:900px)");
        assert_eq!(bp.down("md").unwrap(), "@media (max-width:899.95px)");
        assert_eq!(bp.down("xs").unwrap(), "@media (max-width:-0.05px)");
    }

    #[test]
    fn between_and_only() {
        let bp = defaults();
        assert_eq!(
            bp.between("sm", "md").unwrap(),
            "@media (min-width:600px) and (max-width:899.95px)"
        );
        assert_eq!(
            bp.only("md").unwrap(),
            "@media (min-width:900px) and (max-width:1199.95px)"
        );
        assert_eq!(bp.only("xl").unwrap(), "@media (min-width:1536px)");
    }

    #[test]
    fn not_query() {
        let bp = defaults();
        assert_eq!(bp.not("xs").unwrap(), "@media (min-width:600px)");
        assert_eq!(bp.not("xl").unwrap(), "@media (max-width:1535.95px)");
        assert_eq!(
            bp.not("md").unwrap(),
            "@media not all and (min-width:900px) and (max-width:1199.95px)"
        );
    }

    #[test]
    fn unknown_key() {
        assert_eq!(
            defaults().up("xxl"),
            Err(BreakpointError::UnknownBreakpoint("xxl".into()))
        );
        assert!(defaults().between("xs", "huge").is_err());
    }

    #[test]
    fn custom_unit_and_step() {
        let bp = create_breakpoints(&BreakpointsOptions {
            values: Some(IndexMap::from([
                ("mobile".to_string(), 0.0),
                ("tablet".to_string(), 40.0),
                ("desktop".to_string(), 64.0),
            ])),
            unit: Some("rem".into()),
            step: Some(1.0),
        })
        .unwrap();
        assert_eq!(bp.up("tablet").unwrap(), "@media (min-width:40rem)");
        assert_eq!(bp.down("desktop").unwrap(), "@media (max-width:63.99rem)");
    }

    #[test]
    fn default_matches_resolved_defaults() {
        assert_eq!(Breakpoints::default(), defaults());
    }

    #[test]
    fn rejects_negative_and_non_finite_widths() {
        let with_value = |value: f64| {
            create_breakpoints(&BreakpointsOptions {
                values: Some(IndexMap::from([
                    ("xs".to_string(), 0.0),
                    ("odd".to_string(), value),
                ])),
                ..Default::default()
            })
        };

        assert_eq!(
            with_value(-1.0),
            Err(BreakpointError::InvalidValue {
                key: "odd".into(),
                value: -1.0
            })
        );
        assert!(matches!(
            with_value(f64::INFINITY),
            Err(BreakpointError::InvalidValue { .. })
        ));
        assert!(matches!(
            with_value(f64::NAN),
            Err(BreakpointError::InvalidValue { .. })
        ));
    }
}

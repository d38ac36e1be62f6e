//! Stacking order for overlay components

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZIndex {
    pub mobile_stepper: i32,
    pub speed_dial: i32,
    pub app_bar: i32,
    pub drawer: i32,
    pub modal: i32,
    pub snackbar: i32,
    pub tooltip: i32,
    pub fab: i32,
}

impl Default for ZIndex {
    fn default() -> Self {
        Self {
            mobile_stepper: 1000,
            speed_dial: 1050,
            app_bar: 1050,
            drawer: 1100,
            modal: 1200,
            snackbar: 1300,
            tooltip: 1400,
            fab: 1500,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZIndexOptions {
    pub mobile_stepper: Option<i32>,
    pub speed_dial: Option<i32>,
    pub app_bar: Option<i32>,
    pub drawer: Option<i32>,
    pub modal: Option<i32>,
    pub snackbar: Option<i32>,
    pub tooltip: Option<i32>,
    pub fab: Option<i32>,
}

pub fn create_z_index(options: &ZIndexOptions) -> ZIndex {
    let base = ZIndex::default();
    ZIndex {
        mobile_stepper: options.mobile_stepper.unwrap_or(base.mobile_stepper),
        speed_dial: options.speed_dial.unwrap_or(base.speed_dial),
        app_bar: options.app_bar.unwrap_or(base.app_bar),
        drawer: options.drawer.unwrap_or(base.drawer),
        modal: options.modal.unwrap_or(base.modal),
        snackbar: options.snackbar.unwrap_or(base.snackbar),
        tooltip: options.tooltip.unwrap_or(base.tooltip),
        fab: options.fab.unwrap_or(base.fab),
    }
}

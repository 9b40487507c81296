use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Category;

pub fn run() -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for category in Category::ALL {
        result.add_message(CmdMessage::info(format!(
            "{} ({})",
            category.label(),
            category.alias()
        )));
    }
    Ok(result)
}

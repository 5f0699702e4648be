use super::print_json;
use crate::reports;
use strikeline::error::SlResult;
use strikeline::stats::drill_catalog;

pub fn run(json: bool) -> SlResult<()> {
    let drills = drill_catalog();
    if json {
        return print_json(&drills);
    }
    reports::print_drill_catalog(drills);
    Ok(())
}

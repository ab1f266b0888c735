use chrono::NaiveDate;

use crate::display::format_date;
use crate::model::NO_DUE_DATE;

const DUE_DATE_LAYOUTS: [&str; 2] = ["%Y/%m/%d", "%Y-%m-%d"];

pub fn parse_due_date(input: &str) -> String {
    let s = input.trim();
    DUE_DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(s, layout).ok())
        .map(format_date)
        .unwrap_or_else(|| NO_DUE_DATE.to_string())
}

pub fn is_valid_title(title: &str) -> bool {
    title.chars().count() >= 4
}

pub fn strip_newline(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

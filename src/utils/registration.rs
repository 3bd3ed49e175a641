//! 学号分配
//!
//! 学号为零填充十进制字符串，按字典序与数值序一致。
//! 新学号取当前最大学号加一；历史数据中出现非数字学号时从 "001" 重新起号。

const MIN_WIDTH: usize = 3;

/// 在既有学号中取数值最大者，忽略非数字学号
///
/// 学号位数增长后（"999" → "1000"）字符串序不再等于数值序，必须按数值比较。
pub fn latest_numeric<'a, I>(numbers: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    numbers
        .into_iter()
        .filter_map(|s| s.trim().parse::<u64>().ok().map(|n| (n, s)))
        .max_by_key(|(n, _)| *n)
        .map(|(_, s)| s)
}

/// 根据当前最大学号计算下一个学号
pub fn next_registration_number(latest: Option<&str>) -> String {
    match latest.and_then(|s| s.trim().parse::<u64>().ok()) {
        Some(n) => {
            let width = latest.map(|s| s.trim().len()).unwrap_or(MIN_WIDTH).max(MIN_WIDTH);
            format!("{:0width$}", n + 1, width = width)
        }
        None => format!("{:0width$}", 1, width = MIN_WIDTH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_student_gets_001() {
        assert_eq!(next_registration_number(None), "001");
    }

    #[test]
    fn increments_past_the_maximum() {
        // 已有 001、002、005 时最大学号为 005
        assert_eq!(next_registration_number(Some("005")), "006");
        assert_eq!(next_registration_number(Some("099")), "100");
    }

    #[test]
    fn width_grows_beyond_three_digits() {
        assert_eq!(next_registration_number(Some("999")), "1000");
        assert_eq!(next_registration_number(Some("1000")), "1001");
    }

    #[test]
    fn non_numeric_latest_restarts_at_001() {
        assert_eq!(next_registration_number(Some("A17")), "001");
        assert_eq!(next_registration_number(Some("")), "001");
    }

    #[test]
    fn latest_numeric_compares_by_value_not_by_string() {
        // 字符串序下 "999" > "1000"，数值序下相反
        assert_eq!(latest_numeric(["001", "999", "1000"]), Some("1000"));
        assert_eq!(latest_numeric(["002", "010", "005"]), Some("010"));
    }

    #[test]
    fn latest_numeric_skips_non_numeric_numbers() {
        assert_eq!(latest_numeric(["A17", "003", "B02"]), Some("003"));
        assert_eq!(latest_numeric(["A17", "B02"]), None);
        assert_eq!(latest_numeric([]), None);
    }
}

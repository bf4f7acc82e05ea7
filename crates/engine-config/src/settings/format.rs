//! Display masks for the school's contact fields. Inputs are kept as raw
//! digit strings in the settings; the masks are applied only when the
//! renderer asks for presentation values.

fn digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// `(XX) XXXXX-XXXX` for 11 digits, `(XX) XXXX-XXXX` for 10; anything else
/// is returned unchanged.
pub fn format_phone(raw: &str) -> String {
    let nums = digits(raw);
    match nums.len() {
        0 => String::new(),
        11 => format!("({}) {}-{}", &nums[..2], &nums[2..7], &nums[7..]),
        10 => format!("({}) {}-{}", &nums[..2], &nums[2..6], &nums[6..]),
        _ => raw.to_string(),
    }
}

/// `XXXXX-XXX`; short inputs are returned as their digit string.
pub fn format_cep(raw: &str) -> String {
    let nums = digits(raw);
    if nums.len() >= 5 {
        let tail_end = nums.len().min(8);
        format!("{}-{}", &nums[..5], &nums[5..tail_end])
    } else {
        nums
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_phone_mobile_and_landline() {
        assert_eq!(format_phone("22999990000"), "(22) 99999-0000");
        assert_eq!(format_phone("2233334444"), "(22) 3333-4444");
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("123"), "123");
    }

    #[test]
    fn test_format_cep() {
        assert_eq!(format_cep("28000123"), "28000-123");
        assert_eq!(format_cep("280"), "280");
    }
}

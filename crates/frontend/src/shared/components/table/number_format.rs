//! Утилиты форматирования чисел для таблиц и подсказок графика (en-US)

/// Форматирует число с разделителем тысяч (запятая) и указанным количеством знаков после точки
///
/// # Примеры
///
/// ```ignore
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (sign, digits) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match digits.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (digits, None),
    };

    // Запятая каждые 3 цифры с конца целой части
    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Группировка разрядов как у `toLocaleString()` в en-US:
/// не более 3 знаков после точки, хвостовые нули отбрасываются.
pub fn format_number(value: f64) -> String {
    let formatted = format_number_with_decimals(value, 3);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Денежное значение: префикс `$` и группировка разрядов
///
/// # Примеры
///
/// ```ignore
/// assert_eq!(format_money(1234567.5), "$1,234,567.5");
/// assert_eq!(format_money(-2010.0), "$-2,010");
/// ```
pub fn format_money(value: f64) -> String {
    format!("${}", format_number(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(348123.0), "$348,123");
        assert_eq!(format_money(1234567.5), "$1,234,567.5");
        assert_eq!(format_money(0.0), "$0");
        assert_eq!(format_money(-2010.0), "$-2,010");
        assert_eq!(format_money(999.0), "$999");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(-1234567.0, 0), "-1,234,567");
        assert_eq!(format_number_with_decimals(123.0, 2), "123.00");
    }

    #[test]
    fn test_format_number_trims_fraction() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(1234567.891), "1,234,567.891");
        assert_eq!(format_number(12.3456), "12.346");
        assert_eq!(format_number(-0.0001), "0");
        assert_eq!(format_number(100000.0), "100,000");
    }
}

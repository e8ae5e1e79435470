//! Форматирование чисел для таблицы товаров

/// Вставляет разделитель тысяч в целую часть числа
fn group_thousands(integer_part: &str, separator: char) -> String {
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}")
}

/// Форматирует сумму: два знака после точки и запятая как разделитель тысяч
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_amount;
/// assert_eq!(format_amount(1234.5), "1,234.50");
/// ```
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    match formatted.split_once('.') {
        Some((integer_part, fraction)) => {
            format!("{}.{}", group_thousands(integer_part, ','), fraction)
        }
        None => group_thousands(&formatted, ','),
    }
}

/// Сумма с символом валюты перед числом: `$1,234.50`, `-$3.00`
pub fn format_money(value: f64, currency_symbol: &str) -> String {
    let amount = format_amount(value.abs());
    if value < 0.0 {
        format!("-{currency_symbol}{amount}")
    } else {
        format!("{currency_symbol}{amount}")
    }
}

/// Целое количество с разделителем тысяч
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string(), ',')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(19.99), "19.99");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-1234.5), "-1,234.50");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(19.99, "$"), "$19.99");
        assert_eq!(format_money(-3.0, "$"), "-$3.00");
        assert_eq!(format_money(1000.0, "€"), "€1,000.00");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}

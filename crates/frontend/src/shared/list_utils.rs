/// Универсальные утилиты для сортировки списков и индикаторов в заголовках
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn is_ascending(&self) -> bool {
        matches!(self, SortDirection::Asc)
    }
}

/// Значение поля, по которому сортируется строка
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Number(f64),
    Text(String),
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    type Key: Copy;

    /// Значение указанного поля для сравнения
    fn sort_value(&self, key: Self::Key) -> SortValue;
}

/// Сравнение строк без учёта регистра, регистр различает только равные строки
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

/// Числа сравниваются как числа, строки через `locale_compare`.
/// Разнотипные значения (и NaN) считаются равными.
pub fn compare_values(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Number(a), SortValue::Number(b)) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        (SortValue::Text(a), SortValue::Text(b)) => locale_compare(a, b),
        _ => Ordering::Equal,
    }
}

/// Возвращает отсортированную копию списка.
///
/// Сортировка устойчивая: строки с равными ключами сохраняют исходный порядок
/// в обоих направлениях.
pub fn sorted_list<T: Sortable + Clone>(
    items: &[T],
    key: T::Key,
    direction: SortDirection,
) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let cmp = compare_values(&a.sort_value(key), &b.sort_value(key));
        match direction {
            SortDirection::Asc => cmp,
            SortDirection::Desc => cmp.reverse(),
        }
    });
    sorted
}

/// Индикатор сортировки для заголовка: вверх только для активной колонки по возрастанию
pub fn get_sort_indicator(is_active: bool, direction: SortDirection) -> &'static str {
    if is_active && direction.is_ascending() {
        "▲"
    } else {
        "▼"
    }
}

/// CSS-класс индикатора
pub fn get_sort_class(is_active: bool) -> &'static str {
    if is_active {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        qty: f64,
    }

    #[derive(Debug, Clone, Copy)]
    enum RowKey {
        Name,
        Qty,
    }

    impl Sortable for Row {
        type Key = RowKey;

        fn sort_value(&self, key: RowKey) -> SortValue {
            match key {
                RowKey::Name => SortValue::Text(self.name.to_string()),
                RowKey::Qty => SortValue::Number(self.qty),
            }
        }
    }

    fn names(rows: &[Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_locale_compare_ignores_case_first() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("Apple", "apple"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_mixed_values_are_equal() {
        assert_eq!(
            compare_values(&SortValue::Number(1.0), &SortValue::Text("a".into())),
            Ordering::Equal
        );
        assert_eq!(
            compare_values(&SortValue::Number(f64::NAN), &SortValue::Number(1.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_sorted_list_is_stable_in_both_directions() {
        let rows = vec![
            Row { name: "a", qty: 2.0 },
            Row { name: "b", qty: 1.0 },
            Row { name: "c", qty: 2.0 },
            Row { name: "d", qty: 1.0 },
        ];

        let asc = sorted_list(&rows, RowKey::Qty, SortDirection::Asc);
        assert_eq!(names(&asc), vec!["b", "d", "a", "c"]);

        let desc = sorted_list(&rows, RowKey::Qty, SortDirection::Desc);
        assert_eq!(names(&desc), vec!["a", "c", "b", "d"]);

        // исходный список не меняется
        assert_eq!(names(&rows), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_sorted_list_by_text() {
        let rows = vec![
            Row { name: "pear", qty: 0.0 },
            Row { name: "Apple", qty: 0.0 },
            Row { name: "fig", qty: 0.0 },
        ];
        let sorted = sorted_list(&rows, RowKey::Name, SortDirection::Asc);
        assert_eq!(names(&sorted), vec!["Apple", "fig", "pear"]);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator(true, SortDirection::Asc), "▲");
        assert_eq!(get_sort_indicator(true, SortDirection::Desc), "▼");
        assert_eq!(get_sort_indicator(false, SortDirection::Asc), "▼");
    }
}

//! Компонент ячейки таблицы для денежных значений
//!
//! # Примеры
//!
//! ```ignore
//! // Базовое использование
//! <TableCellMoney value=record.retail_sales />
//!
//! // С цветовой индикацией (маржа может быть отрицательной)
//! <TableCellMoney value=record.retailer_margin color_by_sign=true />
//! ```

use super::number_format::format_money;
use leptos::prelude::*;
use thaw::*;

/// Компонент ячейки таблицы для отображения денежных значений
///
/// Форматирует значение как `$1,234.5` и при необходимости
/// окрашивает отрицательные значения в красный.
#[component]
pub fn TableCellMoney(
    /// Значение для отображения
    #[prop(into)]
    value: Signal<f64>,

    /// Включить цветовую индикацию отрицательных значений
    #[prop(optional, default = false)]
    color_by_sign: bool,
) -> impl IntoView {
    let formatted_text = move || format_money(value.get());

    let cell_style = move || {
        if color_by_sign && value.get() < 0.0 {
            "color: var(--color-error-700)"
        } else {
            ""
        }
    };

    view! {
        <TableCell>
            <span style=cell_style>
                {formatted_text}
            </span>
        </TableCell>
    }
}

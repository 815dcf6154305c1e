//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Retail Sales"
//!     is_active=Signal::derive(move || sort.get().is_some_and(|s| s.key == SortKey::RetailSales))
//!     direction=Signal::derive(move || sort.get().map(|s| s.direction).unwrap_or_default())
//!     on_click=Callback::new(move |_| request_sort(SortKey::RetailSales))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator, SortDirection};
use leptos::prelude::*;
use thaw::*;

/// Ячейка заголовка с кнопкой-шевроном.
///
/// Шеврон смотрит вверх, только когда колонка активна и отсортирована по возрастанию.
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Является ли колонка текущим ключом сортировки
    #[prop(into)]
    is_active: Signal<bool>,

    /// Текущее направление сортировки
    #[prop(into)]
    direction: Signal<SortDirection>,

    /// Callback при клике на шеврон
    on_click: Callback<()>,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "display: flex; align-items: center; justify-content: flex-end; gap: 4px;"
    } else {
        "display: flex; align-items: center; gap: 4px;"
    };

    view! {
        <TableHeaderCell>
            <div class="table__sortable-header" style=header_style>
                {label}
                <button
                    class=move || get_sort_class(is_active.get())
                    style="background: none; border: none; cursor: pointer; padding: 0 2px; font-size: 10px; color: inherit;"
                    on:click=move |_| on_click.run(())
                >
                    {move || get_sort_indicator(is_active.get(), direction.get())}
                </button>
            </div>
        </TableHeaderCell>
    }
}

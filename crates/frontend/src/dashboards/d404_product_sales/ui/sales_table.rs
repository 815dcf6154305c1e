use crate::dashboards::d404_product_sales::sorting::{sort_records, SortConfig, SortKey};
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use contracts::dashboards::d404_product_sales::SalesRecord;
use leptos::prelude::*;
use thaw::*;

/// Weekly sales table with per-column sorting
#[component]
pub fn SalesTable(records: Vec<SalesRecord>) -> impl IntoView {
    // None = fetch order
    let (sort, set_sort) = signal(None::<SortConfig>);
    let records = StoredValue::new(records);

    let sorted_records =
        Memo::new(move |_| records.with_value(|r| sort_records(r, sort.get())));

    let request_sort = move |key: SortKey| {
        set_sort.update(|current| *current = Some(SortConfig::request(*current, key)));
    };

    let header_cells = SortKey::ALL
        .into_iter()
        .map(|key| {
            view! {
                <SortableHeaderCell
                    label=key.label()
                    is_active=Signal::derive(move || sort.get().is_some_and(|s| s.key == key))
                    direction=Signal::derive(move || {
                        sort.get().map(|s| s.direction).unwrap_or_default()
                    })
                    on_click=Callback::new(move |_| request_sort(key))
                />
            }
        })
        .collect_view();

    view! {
        <Table>
            <TableHeader>
                <TableRow>{header_cells}</TableRow>
            </TableHeader>
            <TableBody>
                {move || {
                    let rows = sorted_records.get();
                    if rows.is_empty() {
                        return view! {
                            <TableRow>
                                <TableCell>
                                    <span style="color: #9CA3AF;">"No sales records."</span>
                                </TableCell>
                            </TableRow>
                        }
                        .into_any();
                    }

                    rows.into_iter()
                        .map(|record| {
                            view! {
                                <TableRow>
                                    <TableCell>{record.week_ending.to_us_string()}</TableCell>
                                    <TableCellMoney value=record.retail_sales />
                                    <TableCellMoney value=record.wholesale_sales />
                                    <TableCell>{record.units_sold.to_string()}</TableCell>
                                    <TableCellMoney value=record.retailer_margin color_by_sign=true />
                                </TableRow>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </TableBody>
        </Table>
    }
}

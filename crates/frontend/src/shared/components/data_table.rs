//! Generic sortable, paginated table.
//!
//! Schema-independent: the row type is generic and the ordered column
//! definitions (header, cell projection, optional sort behaviour) are
//! supplied by the caller. All state is internal (active sort + page index);
//! no network, no knowledge of where rows came from.

use std::cmp::Ordering;
use std::sync::Arc;

use leptos::prelude::*;

use super::grid::{self, SortState, DEFAULT_PAGE_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnAlign {
    Left,
    Right,
}

#[derive(Clone)]
struct ColumnSort<T> {
    cmp: Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>,
    desc_first: bool,
}

/// One column definition: stable key, header label, cell projection and
/// optional sort behaviour.
#[derive(Clone)]
pub struct Column<T> {
    key: &'static str,
    header: &'static str,
    align: ColumnAlign,
    cell: Arc<dyn Fn(&T) -> AnyView + Send + Sync>,
    sort: Option<ColumnSort<T>>,
}

impl<T> Column<T> {
    /// Column with an arbitrary view cell.
    pub fn view(
        key: &'static str,
        header: &'static str,
        cell: impl Fn(&T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            header,
            align: ColumnAlign::Left,
            cell: Arc::new(cell),
            sort: None,
        }
    }

    /// Column with a plain text cell.
    pub fn text(
        key: &'static str,
        header: &'static str,
        cell: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self::view(key, header, move |row| cell(row).into_any())
    }

    pub fn align_right(mut self) -> Self {
        self.align = ColumnAlign::Right;
        self
    }

    pub fn sortable(mut self, cmp: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static) -> Self {
        self.sort = Some(ColumnSort {
            cmp: Arc::new(cmp),
            desc_first: false,
        });
        self
    }

    /// Sortable column whose first click sorts descending (rankings, scores).
    pub fn sortable_desc_first(
        mut self,
        cmp: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.sort = Some(ColumnSort {
            cmp: Arc::new(cmp),
            desc_first: true,
        });
        self
    }

    fn align_class(&self) -> &'static str {
        match self.align {
            ColumnAlign::Left => "data-table__cell",
            ColumnAlign::Right => "data-table__cell data-table__cell--right",
        }
    }
}

#[component]
pub fn DataTable<T>(
    #[prop(into)] rows: Signal<Vec<T>>,
    columns: Vec<Column<T>>,
    #[prop(optional)] page_size: Option<usize>,
) -> impl IntoView
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    let columns = StoredValue::new(columns);

    let (sort, set_sort) = signal(None::<SortState>);
    let (page_index, set_page_index) = signal(0usize);

    // New row set: back to the first page.
    Effect::new(move |prev: Option<usize>| {
        let len = rows.with(|r| r.len());
        if prev.is_some() {
            set_page_index.set(0);
        }
        len
    });

    let sorted = Memo::new(move |_| {
        let mut data = rows.get();
        if let Some(state) = sort.get() {
            let cmp = columns.with_value(|cols| {
                cols.iter()
                    .find(|c| c.key == state.key)
                    .and_then(|c| c.sort.as_ref().map(|s| s.cmp.clone()))
            });
            if let Some(cmp) = cmp {
                grid::apply_sort(&mut data, |a, b| (cmp.as_ref())(a, b), state.direction);
            }
        }
        data
    });

    let total = move || sorted.with(|rows| rows.len());

    let visible = move || {
        sorted.with(|rows| {
            let window = grid::page_window(rows.len(), page_size, page_index.get());
            rows[window].to_vec()
        })
    };

    let on_sort = move |key: &'static str, desc_first: bool| {
        set_sort.update(|state| *state = grid::next_sort(state.as_ref(), key, desc_first));
        set_page_index.set(0);
    };

    let header_cells = move || {
        columns.with_value(|cols| {
            cols.iter()
                .map(|col| {
                    let align_class = col.align_class();
                    let key = col.key;
                    let header = col.header;
                    match &col.sort {
                        Some(sort_def) => {
                            let desc_first = sort_def.desc_first;
                            view! {
                                <th class=align_class>
                                    <button
                                        class="data-table__sort-button"
                                        on:click=move |_| on_sort(key, desc_first)
                                    >
                                        {header}
                                        <span class="data-table__sort-indicator">
                                            {move || grid::sort_indicator(sort.get().as_ref(), key)}
                                        </span>
                                    </button>
                                </th>
                            }
                            .into_any()
                        }
                        None => view! { <th class=align_class>{header}</th> }.into_any(),
                    }
                })
                .collect_view()
        })
    };

    let body_rows = move || {
        let data = visible();
        if data.is_empty() {
            let span = columns.with_value(|cols| cols.len());
            return view! {
                <tr class="data-table__empty-row">
                    <td colspan=span.to_string() class="data-table__empty-cell">"No results"</td>
                </tr>
            }
            .into_any();
        }

        data.into_iter()
            .map(|row| {
                let cells = columns.with_value(|cols| {
                    cols.iter()
                        .map(|col| {
                            let class = col.align_class();
                            let content = (col.cell.as_ref())(&row);
                            view! { <td class=class>{content}</td> }
                        })
                        .collect_view()
                });
                view! { <tr class="data-table__row">{cells}</tr> }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="data-table">
            <table class="data-table__table">
                <thead class="data-table__head">
                    <tr>{header_cells}</tr>
                </thead>
                <tbody>{body_rows}</tbody>
            </table>

            <div class="data-table__footer">
                <div class="data-table__page-size">
                    "Items per page: " <span class="data-table__page-size-value">{page_size}</span>
                </div>
                <div class="data-table__pager">
                    <span class="data-table__range">
                        {move || grid::footer_label(total(), page_size, page_index.get())}
                    </span>
                    <button
                        class="data-table__pager-button"
                        disabled=move || grid::prev_disabled(page_index.get())
                        on:click=move |_| set_page_index.update(|page| *page = page.saturating_sub(1))
                    >
                        "Prev"
                    </button>
                    <button
                        class="data-table__pager-button"
                        disabled=move || grid::next_disabled(total(), page_size, page_index.get())
                        on:click=move |_| {
                            let total_rows = total();
                            set_page_index.update(|page| {
                                if *page + 1 < grid::page_count(total_rows, page_size) {
                                    *page += 1;
                                }
                            });
                        }
                    >
                        "Next"
                    </button>
                </div>
            </div>
        </div>
    }
}

use dioxus::prelude::*;

/// Scrollable table. `columns` become the header cells; children are the
/// body rows.
#[component]
pub fn DataTable(columns: Vec<String>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                thead {
                    tr {
                        for (index, column) in columns.iter().enumerate() {
                            th { key: "{index}", scope: "col", "{column}" }
                        }
                    }
                }
                tbody { {children} }
            }
        }
    }
}

#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

/// Body cell. `numeric` right-aligns with tabular figures.
#[component]
pub fn DataTableCell(#[props(default = false)] numeric: bool, children: Element) -> Element {
    rsx! {
        td { class: if numeric { "data-table-numeric" } else { "" }, {children} }
    }
}

/// Full-width row shown when the table has no data.
#[component]
pub fn DataTableEmpty(columns: usize, children: Element) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{columns}", {children} }
        }
    }
}

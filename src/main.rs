use gloo_console::error;
use gloo_dialogs::alert;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, InputEvent};
use yew::prelude::*;

mod api;
mod models;

use models::{build_payload, png_data_url, ExpenseRow, EXPENSE_CATEGORIES};

fn display_style(visible: bool) -> &'static str {
    if visible {
        "display: block"
    } else {
        "display: none"
    }
}

fn income_field(
    id: &'static str,
    label: &'static str,
    step: &'static str,
    value: UseStateHandle<String>,
) -> Html {
    let oninput = {
        let value = value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            value.set(input.value());
        })
    };

    html! {
        <div class="space-y-1">
            <label for={id} class="text-xs font-bold text-slate-500 uppercase tracking-wide">{ label }</label>
            <input
                type="number"
                id={id}
                min="0"
                step={step}
                placeholder="0"
                value={(*value).clone()}
                {oninput}
                class="w-full bg-slate-100 rounded-lg px-3 py-2 text-sm text-slate-800 border-none outline-none focus:ring-2 focus:ring-[#173E63]"
            />
        </div>
    }
}

#[function_component(BudgetForm)]
fn budget_form() -> Html {
    let age = use_state(|| "".to_string());
    let salary = use_state(|| "".to_string());
    let additional_income = use_state(|| "".to_string());
    let investments = use_state(|| "".to_string());
    let bonuses = use_state(|| "".to_string());
    let gov_benefits = use_state(|| "".to_string());

    let rows = use_state(Vec::<ExpenseRow>::new);

    let report = use_state(|| None::<String>);
    let think = use_state(|| None::<String>);
    let charts = use_state(|| None::<(String, String)>);
    let generating = use_state(|| false);

    let on_add_row = {
        let rows = rows.clone();
        Callback::from(move |_| {
            let mut next = (*rows).clone();
            next.push(ExpenseRow::new());
            rows.set(next);
        })
    };

    let on_submit = {
        let age = age.clone();
        let salary = salary.clone();
        let additional_income = additional_income.clone();
        let investments = investments.clone();
        let bonuses = bonuses.clone();
        let gov_benefits = gov_benefits.clone();
        let rows = rows.clone();
        let report = report.clone();
        let think = think.clone();
        let charts = charts.clone();
        let generating = generating.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload = build_payload(
                &age,
                &salary,
                &additional_income,
                &investments,
                &bonuses,
                &gov_benefits,
                &rows,
            );

            let report = report.clone();
            let think = think.clone();
            let charts = charts.clone();
            let generating = generating.clone();

            generating.set(true);
            spawn_local(async move {
                // The report must succeed before charts are ever requested.
                match api::generate_report(&payload).await {
                    Ok(data) => report.set(Some(data.report)),
                    Err(err) => {
                        error!(format!("Failed to get budget report: {err}"));
                        alert("Error generating budget report.");
                        generating.set(false);
                        return;
                    }
                }

                // A chart failure leaves the rendered report in place.
                match api::generate_charts(&payload).await {
                    Ok(data) => {
                        think.set(data.reasoning().map(str::to_string));
                        charts.set(Some((
                            png_data_url(&data.chart1),
                            png_data_url(&data.chart2),
                        )));
                    }
                    Err(err) => {
                        error!(format!("Failed to get charts: {err}"));
                        alert("Error generating charts.");
                    }
                }
                generating.set(false);
            });
        })
    };

    html! {
        <>
            <form id="expenseForm" class="space-y-6" onsubmit={on_submit}>
                <div class="bg-white rounded-xl border border-slate-200 p-6 shadow-sm">
                    <h2 class="text-lg font-bold text-[#173E63] mb-4">{"Monthly Income"}</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        { income_field("age", "Age", "1", age.clone()) }
                        { income_field("salary", "Salary", "any", salary.clone()) }
                        { income_field("additionalIncome", "Additional Income", "any", additional_income.clone()) }
                        { income_field("investments", "Investments / Passive", "any", investments.clone()) }
                        { income_field("bonuses", "Bonuses / Commissions", "any", bonuses.clone()) }
                        { income_field("govBenefits", "Government Benefits", "any", gov_benefits.clone()) }
                    </div>
                </div>

                <div class="bg-white rounded-xl border border-slate-200 p-6 shadow-sm">
                    <div class="flex items-center justify-between mb-4">
                        <h2 class="text-lg font-bold text-[#173E63]">{"Monthly Expenses"}</h2>
                        <button type="button" onclick={on_add_row} class="bg-[#173E63] text-white px-4 py-2 rounded-lg text-xs font-bold hover:opacity-90 transition-all">
                            {"Add Expense"}
                        </button>
                    </div>
                    <table id="expenseTable" class="w-full text-left border-collapse">
                        <thead>
                            <tr class="text-slate-500 text-[10px] uppercase tracking-widest border-b border-slate-200">
                                <th class="py-2 pr-3 font-bold">{"Type"}</th>
                                <th class="py-2 pr-3 font-bold">{"Amount"}</th>
                                <th class="py-2 pr-3 font-bold">{"Category"}</th>
                                <th class="py-2 font-bold"></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for rows.iter().enumerate().map(|(idx, row)| {
                                let on_kind = {
                                    let rows = rows.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        let mut next = (*rows).clone();
                                        next[idx].kind = input.value();
                                        rows.set(next);
                                    })
                                };
                                let on_amount = {
                                    let rows = rows.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        let mut next = (*rows).clone();
                                        next[idx].amount = input.value();
                                        rows.set(next);
                                    })
                                };
                                let on_category = {
                                    let rows = rows.clone();
                                    Callback::from(move |e: Event| {
                                        let select: HtmlSelectElement = e.target_unchecked_into();
                                        let mut next = (*rows).clone();
                                        next[idx].category = select.value();
                                        rows.set(next);
                                    })
                                };
                                let on_delete = {
                                    let rows = rows.clone();
                                    Callback::from(move |_| {
                                        let mut next = (*rows).clone();
                                        next.remove(idx);
                                        rows.set(next);
                                    })
                                };

                                html! {
                                    <tr key={idx} class="border-b border-slate-100">
                                        <td class="py-2 pr-3">
                                            <input type="text" name="expenseType" placeholder="e.g. Rent" required={true} value={row.kind.clone()} oninput={on_kind} class="w-full bg-slate-100 rounded-lg px-3 py-2 text-sm border-none outline-none" />
                                        </td>
                                        <td class="py-2 pr-3">
                                            <input type="number" name="expenseAmount" placeholder="Amount" step="any" required={true} value={row.amount.clone()} oninput={on_amount} class="w-full bg-slate-100 rounded-lg px-3 py-2 text-sm border-none outline-none" />
                                        </td>
                                        <td class="py-2 pr-3">
                                            <select name="expenseCategory" required={true} onchange={on_category} class="w-full bg-slate-100 rounded-lg px-3 py-2 text-sm border-none outline-none">
                                                { for EXPENSE_CATEGORIES.iter().map(|c| html! {
                                                    <option value={*c} selected={row.category == *c}>{ *c }</option>
                                                }) }
                                            </select>
                                        </td>
                                        <td class="py-2">
                                            <button type="button" onclick={on_delete} class="text-red-600 text-xs font-bold hover:underline">
                                                {"Delete"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                    {
                        if rows.is_empty() {
                            html! { <p class="text-sm text-slate-400 mt-3">{"No expenses yet. Add a row to get started."}</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <button type="submit" disabled={*generating} class="w-full bg-[#1D617A] text-white py-3 rounded-xl text-sm font-bold shadow-md hover:opacity-90 transition-all disabled:opacity-60">
                    { if *generating { "Generating..." } else { "Generate Budget Report" } }
                </button>
            </form>

            <div id="reportOutput" class="mt-6">
                {
                    if let Some(text) = &*report {
                        html! {
                            <div class="bg-white rounded-xl border border-slate-200 p-6 shadow-sm">
                                <h3 class="text-lg font-bold text-[#173E63] mb-3">{"Your Budget Report"}</h3>
                                <pre class="whitespace-pre-wrap text-sm text-slate-700">{ text.clone() }</pre>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <details id="thinkDetails" class="mt-4 bg-white rounded-xl border border-slate-200 p-4 shadow-sm" style={display_style(think.is_some())}>
                <summary class="text-sm font-bold text-[#173E63] cursor-pointer">{"Show model reasoning"}</summary>
                <pre id="thinkContent" class="whitespace-pre-wrap text-xs text-slate-600 mt-3">{ (*think).clone().unwrap_or_default() }</pre>
            </details>

            <div id="chartsContainer" class="mt-6 bg-white rounded-xl border border-slate-200 p-6 shadow-sm" style={display_style(charts.is_some())}>
                <h3 class="text-lg font-bold text-[#173E63] mb-4">{"Your Budget Charts"}</h3>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <img id="chart1Image" alt="Expense breakdown" src={charts.as_ref().map(|c| c.0.clone()).unwrap_or_default()} class="w-full rounded-lg border border-slate-100" />
                    <img id="chart2Image" alt="Savings projection" src={charts.as_ref().map(|c| c.1.clone()).unwrap_or_default()} class="w-full rounded-lg border border-slate-100" />
                </div>
            </div>
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="min-h-screen bg-slate-50 text-slate-800">
            <header class="bg-[#173E63] text-white px-6 py-4 shadow-md">
                <h1 class="text-2xl font-black tracking-tight">{"Budget Planner"}</h1>
                <p class="text-sm text-slate-300">{"Monthly budget report and projections"}</p>
            </header>
            <main class="max-w-4xl mx-auto p-6">
                <BudgetForm />
            </main>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

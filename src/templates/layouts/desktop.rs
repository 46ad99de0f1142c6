use maud::{html, Markup, DOCTYPE};

const PAGE_STYLE: &str = "
body { font-family: system-ui, sans-serif; max-width: 1100px; margin: 0 auto; padding: 0 1rem 3rem; color: #1f2937; }
header { display: flex; align-items: center; gap: 0.75rem; padding: 1rem 0; border-bottom: 1px solid #e5e7eb; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem 1.25rem; margin-top: 1.25rem; }
.muted { color: #6b7280; }
.error { color: #b91c1c; }
table { width: 100%; border-collapse: collapse; font-size: 0.9rem; }
th, td { text-align: left; padding: 0.4rem 0.5rem; border-bottom: 1px solid #f3f4f6; }
#map { height: 460px; border-radius: 8px; }
button.primary { background: #524ed2; color: white; border: none; border-radius: 6px; padding: 0.5rem 1.1rem; font-size: 1rem; cursor: pointer; }
button.primary[disabled] { opacity: 0.5; cursor: default; }
";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
                script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" {}
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
                style { (maud::PreEscaped(PAGE_STYLE)) }
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    h3 { "FSBO Hunter" }
                    span class="muted" { "NDG / Côte-des-Neiges" }
                }
                (content)
            }
        }
    }
}

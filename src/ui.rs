use crate::airports::AIRPORTS;
use crate::chart::{escape_xml, render_chart_svg};
use crate::models::{format_search_date, ChartView, SearchQuery, TripType};

/// Text shown next to "Cheapest median price".
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(value) if value.fract() == 0.0 => format!("{value:.0}€"),
        Some(value) => format!("{value:.2}€"),
        None => "--".to_string(),
    }
}

/// Renders the page with the form pre-filled from the last search (or the
/// defaults) and the current chart inlined.
pub fn render_index(view: &ChartView) -> String {
    let form = match &view.params {
        Some(params) => SearchQuery {
            origin: params.origin.clone(),
            destination: params.destination.clone(),
            trip_type: params.trip_type.code().to_string(),
            date_min: format_search_date(params.date_min),
            date_max: format_search_date(params.date_max),
        },
        None => SearchQuery::default(),
    };

    let round_trip = TripType::from_code(&form.trip_type) != Some(TripType::OneWay);
    let (rt_selected, ow_selected) = if round_trip {
        (" selected", "")
    } else {
        ("", " selected")
    };

    let airport_options: String = AIRPORTS
        .iter()
        .map(|a| format!(r#"<option value="{}">{}</option>"#, a.code, escape_xml(a.name)))
        .collect();

    let origin = escape_xml(&form.origin);
    let destination = escape_xml(&form.destination);
    let date_min = escape_xml(&form.date_min);
    let date_max = escape_xml(&form.date_max);
    let cheapest = format_price(view.cheapest_median_price);
    let chart = render_chart_svg(view);

    fill_template(INDEX_HTML, |name| match name {
        "AIRPORT_OPTIONS" => Some(airport_options.as_str()),
        "ORIGIN" => Some(origin.as_str()),
        "DESTINATION" => Some(destination.as_str()),
        "DATE_MIN" => Some(date_min.as_str()),
        "DATE_MAX" => Some(date_max.as_str()),
        "RT_SELECTED" => Some(rt_selected),
        "OW_SELECTED" => Some(ow_selected),
        "CHEAPEST" => Some(cheapest.as_str()),
        "CHART" => Some(chart.as_str()),
        _ => None,
    })
}

/// Substitutes `{{NAME}}` markers in a single left-to-right pass. Inserted
/// values are never scanned again; unknown markers are kept verbatim.
fn fill_template<'a, F>(template: &str, value_of: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let name = &after[..end];
                match value_of(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(name);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Amadeus analytics</title>
  <style>
    :root {
      --bg: #f4f6fb;
      --ink: #1f2430;
      --amadeus: #005eb8;
      --card: #ffffff;
      --shadow: 0 16px 40px rgba(0, 40, 90, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Helvetica Neue", Arial, sans-serif;
      display: flex;
      flex-direction: column;
      align-items: center;
      padding: 32px 18px 48px;
      gap: 24px;
    }

    h1 {
      margin: 0;
      color: var(--amadeus);
      font-weight: 700;
    }

    .card {
      width: min(1000px, 100%);
      background: var(--card);
      border-radius: 12px;
      box-shadow: var(--shadow);
      padding: 24px;
      display: grid;
      gap: 16px;
    }

    .card h2 {
      margin: 0;
      font-size: 1.5rem;
    }

    .fields {
      display: flex;
      flex-wrap: wrap;
      gap: 16px;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      color: #5b6270;
    }

    input,
    select {
      font: inherit;
      padding: 10px 12px;
      border: 1px solid #c9cfdb;
      border-radius: 6px;
      min-width: 180px;
    }

    button {
      justify-self: start;
      appearance: none;
      border: none;
      border-radius: 6px;
      padding: 12px 22px;
      font-size: 1rem;
      font-weight: 600;
      background: var(--amadeus);
      color: white;
      cursor: pointer;
    }

    .cheapest {
      font-size: 1.25rem;
    }

    #chart svg {
      width: 100%;
      height: auto;
      display: block;
    }

    .chart-grid {
      stroke: rgba(31, 36, 48, 0.1);
    }

    .chart-axis {
      stroke: rgba(31, 36, 48, 0.5);
    }

    .chart-label {
      fill: #5b6270;
      font-size: 12px;
    }

    .axis-label {
      fill: var(--ink);
      font-size: 14px;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.95rem;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }
  </style>
</head>
<body>
  <h1>Amadeus analytics</h1>

  <form class="card" id="search-form" method="get" action="/search">
    <h2>Search for flight prices</h2>
    <div class="fields">
      <label>Trip type
        <select name="trip_type" id="trip_type">
          <option value="OW"{{OW_SELECTED}}>One way</option>
          <option value="RT"{{RT_SELECTED}}>Round trip</option>
        </select>
      </label>
      <label>Where from?
        <input name="origin" id="origin" list="airports" value="{{ORIGIN}}" />
      </label>
      <label>Where to?
        <input name="destination" id="destination" list="airports" value="{{DESTINATION}}" />
      </label>
      <label>Search for trips after
        <input name="date_min" id="date_min" placeholder="yyyy/MM/dd" value="{{DATE_MIN}}" />
      </label>
      <label>Search for trips before
        <input name="date_max" id="date_max" placeholder="yyyy/MM/dd" value="{{DATE_MAX}}" />
      </label>
    </div>
    <datalist id="airports">{{AIRPORT_OPTIONS}}</datalist>
    <button type="submit">Explore</button>
    <div class="status" id="status"></div>
  </form>

  <section class="card">
    <div class="cheapest">Cheapest median price: <span id="cheapest">{{CHEAPEST}}</span></div>
    <div id="chart">{{CHART}}</div>
  </section>

  <script>
    const form = document.getElementById('search-form');
    const statusEl = document.getElementById('status');
    const chartEl = document.getElementById('chart');
    const cheapestEl = document.getElementById('cheapest');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const formatPrice = (value) => {
      if (typeof value !== 'number') {
        return '--';
      }
      return (Number.isInteger(value) ? value.toString() : value.toFixed(2)) + '€';
    };

    const explore = async () => {
      const query = new URLSearchParams(new FormData(form)).toString();
      setStatus('Searching...', 'info');
      const res = await fetch(`/api/search?${query}`);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Search failed');
      }
      const view = await res.json();
      cheapestEl.textContent = formatPrice(view.cheapest_median_price);

      const svg = await fetch('/chart.svg');
      if (svg.ok) {
        chartEl.innerHTML = await svg.text();
      }
      setStatus(`${view.series.length} airline(s)`, 'ok');
    };

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      explore().catch((err) => setStatus(err.message, 'error'));
    });
  </script>
</body>
</html>
"#;

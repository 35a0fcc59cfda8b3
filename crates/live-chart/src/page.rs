// File: crates/live-chart/src/page.rs
// Summary: The single dashboard page: a chart placeholder, a hidden interval element and a status line.

use crate::config::LiveChartConfig;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{{TITLE}}</title>
<style>
  body { margin: 0; font-family: "Open Sans", Arial, sans-serif; background: #fff; color: #2a3f5f; }
  #live-figure { display: block; max-width: 100%; height: auto; margin: 16px auto 4px; }
  #status { text-align: center; font-size: 13px; min-height: 1.2em; }
  #status.error { color: #c0392b; }
</style>
</head>
<body>
<div id="app">
  <img id="live-figure" alt="{{TITLE}}" width="{{WIDTH}}" height="{{HEIGHT}}">
  <div id="status">waiting for first redraw</div>
  <div id="interval-component" data-interval-ms="{{INTERVAL_MS}}" hidden></div>
</div>
<script>
(function () {
  var img = document.getElementById("live-figure");
  var status = document.getElementById("status");
  var every = parseInt(document.getElementById("interval-component").dataset.intervalMs, 10) || 500;
  var shown = null;

  function apply(u) {
    if (u.frame_tick !== null && u.frame_tick !== shown) {
      shown = u.frame_tick;
      img.src = "/figure.png?tick=" + shown;
    }
    if (u.error) {
      status.className = "error";
      status.textContent = "tick " + u.error.tick + ": " + u.error.message;
    } else if (u.tick !== null) {
      status.className = "";
      status.textContent = "tick " + u.tick;
    }
  }

  function poll() {
    fetch("/figure.json", { cache: "no-store" })
      .then(function (r) { return r.json(); })
      .then(apply)
      .catch(function () {});
  }

  if (window.EventSource) {
    var es = new EventSource("/events");
    es.addEventListener("update", function (e) { apply(JSON.parse(e.data)); });
  } else {
    setInterval(poll, every);
  }
  poll();
})();
</script>
</body>
</html>
"#;

/// Dashboard HTML for this configuration.
pub fn render_page(cfg: &LiveChartConfig) -> String {
    TEMPLATE
        .replace("{{TITLE}}", &escape_html(&cfg.column))
        .replace("{{WIDTH}}", &cfg.render.width.to_string())
        .replace("{{HEIGHT}}", &cfg.render.height.to_string())
        .replace("{{INTERVAL_MS}}", &cfg.interval.as_millis().to_string())
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

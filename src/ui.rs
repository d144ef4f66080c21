use crate::content::{Block, Figure, InfoCard, InsightSection, INSIGHT_BLOCKS};
use crate::models::{CalendarDay, CalendarMonth};
use chrono::Datelike;
use std::collections::BTreeMap;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Page {
    Insights,
    Schedule,
}

const MONTHS_RU: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

const WEEKDAYS_RU: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];

pub fn render_insights() -> String {
    let mut body = String::new();
    body.push_str(SITE_HEADER);
    body.push_str("<div class=\"hero\"><div class=\"hero-inner\">");
    body.push_str("<h1>Анализ стримов Олёши</h1>");
    body.push_str(
        "<p class=\"hero-sub\">Ключевые выводы, тренды и прогнозы на основе 935 стримов за 2021–2025 гг.</p>",
    );
    body.push_str("</div>");
    body.push_str(&hero_nav(Page::Insights));
    body.push_str("</div>");

    body.push_str("<main class=\"insights\">");
    for block in INSIGHT_BLOCKS {
        match block {
            Block::Section(section) => body.push_str(&section_html(section)),
            Block::Card(card) => body.push_str(&card_html(card)),
        }
    }
    body.push_str("</main>");

    body.push_str(&call_to_action(Page::Insights));
    body.push_str(REAL_FOOTER);
    body.push_str("<div id=\"lightbox\" hidden><img id=\"lightbox-img\" alt=\"\" /></div>");

    page(
        "Аналитика стримов Olesha",
        "Подробный анализ и инсайты по стримам",
        INSIGHTS_CSS,
        &body,
        INSIGHTS_JS,
    )
}

pub fn render_schedule(months: &[CalendarMonth]) -> String {
    let mut calendar = String::new();
    for month in months {
        calendar.push_str(&month_section(month));
    }
    schedule_shell(&calendar, &month_index_json(months))
}

pub fn render_schedule_unavailable() -> String {
    schedule_shell(
        "<p class=\"calendar-error\">Не удалось загрузить расписание стримов. Попробуйте обновить страницу позже.</p>",
        "{}",
    )
}

fn schedule_shell(calendar_html: &str, month_index: &str) -> String {
    let mut body = String::new();
    body.push_str("<div class=\"schedule-top\"><div class=\"schedule-top-inner\">");
    body.push_str("<h1>Прогноз стримов</h1>");
    body.push_str(
        "<p class=\"hero-sub\">Интерактивный календарь предсказанных стримов на годы вперёд.</p>",
    );
    body.push_str(
        "<button id=\"intro-toggle\" class=\"intro-toggle\" type=\"button\">Скрыть описание</button>",
    );
    body.push_str(INTRO);
    body.push_str("</div>");
    body.push_str(&hero_nav(Page::Schedule));
    body.push_str("</div>");

    body.push_str("<main class=\"calendar\">");
    body.push_str(calendar_html);
    body.push_str("</main>");

    body.push_str(JUMP_BAR);
    body.push_str(DAY_PANEL);
    body.push_str(&call_to_action(Page::Schedule));
    body.push_str(REAL_FOOTER);
    body.push_str("<script id=\"month-index\" type=\"application/json\">");
    body.push_str(month_index);
    body.push_str("</script>");

    page(
        "Прогноз стримов — Olesha Analytics",
        "Календарь предсказанных стримов",
        SCHEDULE_CSS,
        &body,
        SCHEDULE_JS,
    )
}

fn page(title: &str, description: &str, page_css: &str, body: &str, script: &str) -> String {
    PAGE_SHELL
        .replace("{{TITLE}}", title)
        .replace("{{DESCRIPTION}}", description)
        .replace("{{PAGE_CSS}}", page_css)
        .replace("{{BODY}}", body)
        .replace("{{PAGE_SCRIPT}}", script)
}

fn section_html(section: &InsightSection) -> String {
    let mut text = format!("<h2>{}</h2>", section.title);
    for paragraph in section.paragraphs {
        text.push_str("<p>");
        text.push_str(paragraph);
        text.push_str("</p>");
    }
    if !section.bullets.is_empty() {
        text.push_str("<ul class=\"checks\">");
        for bullet in section.bullets {
            text.push_str("<li>");
            text.push_str(bullet);
            text.push_str("</li>");
        }
        text.push_str("</ul>");
    }

    let class = if section.reverse {
        "insight reverse"
    } else {
        "insight"
    };
    format!(
        "<section class=\"{class}\"><div class=\"insight-text\">{text}</div>{figure}</section>",
        figure = figure_html(&section.figure),
    )
}

fn figure_html(figure: &Figure) -> String {
    format!(
        "<figure class=\"insight-figure\"><img src=\"{src}\" alt=\"{alt}\" loading=\"lazy\" /><figcaption>{alt} — нажмите, чтобы увеличить</figcaption></figure>",
        src = figure.src,
        alt = figure.alt,
    )
}

fn card_html(card: &InfoCard) -> String {
    let mut inner = format!("<h3><span class=\"bulb\">💡</span>{}</h3>", card.title);
    for paragraph in card.paragraphs {
        inner.push_str("<p>");
        inner.push_str(paragraph);
        inner.push_str("</p>");
    }
    if !card.bullets.is_empty() {
        inner.push_str("<ul>");
        for bullet in card.bullets {
            inner.push_str("<li>");
            inner.push_str(bullet);
            inner.push_str("</li>");
        }
        inner.push_str("</ul>");
    }
    format!("<aside class=\"info-card\">{inner}</aside>")
}

fn month_section(month: &CalendarMonth) -> String {
    let mut grid = String::new();
    for name in WEEKDAYS_RU {
        grid.push_str("<div class=\"weekday\">");
        grid.push_str(name);
        grid.push_str("</div>");
    }
    for day in &month.days {
        grid.push_str(&day_cell(day.as_ref()));
    }
    format!(
        "<section class=\"month\" id=\"month-{year}-{number}\"><h2>{title}</h2><div class=\"grid\">{grid}</div></section>",
        year = month.year,
        number = month.month,
        title = month_title(month.year, month.month),
    )
}

fn month_title(year: i32, month: u32) -> String {
    format!("{} {year}", MONTHS_RU[(month as usize - 1) % 12])
}

fn day_cell(day: Option<&CalendarDay>) -> String {
    let Some(day) = day else {
        return "<div class=\"day blank\"></div>".to_string();
    };

    let date = day.date.format("%Y-%m-%d");
    let number = day.date.day();
    let mut classes = String::from("day");
    if day.is_today {
        classes.push_str(" today");
    }

    match &day.stream {
        Some(stream) => {
            classes.push(' ');
            classes.push_str(heat_class(stream.predicted_avg_viewers));
            let moon = if stream.is_night_stream {
                "<span class=\"moon\">🌙</span>"
            } else {
                ""
            };
            format!(
                "<button class=\"{classes}\" type=\"button\" data-date=\"{date}\"><span class=\"day-head\"><time datetime=\"{date}\">{number}</time>{moon}</span><span class=\"day-games\" title=\"{full}\">{games}</span><span class=\"day-time\">{start}</span></button>",
                full = escape(&stream.game),
                games = escape(&short_game_list(&stream.game)),
                start = escape(&stream.start_time),
            )
        }
        None => format!(
            "<button class=\"{classes} empty\" type=\"button\" data-date=\"{date}\"><span class=\"day-head\"><time datetime=\"{date}\">{number}</time></span></button>",
        ),
    }
}

/// Tile color by expected popularity, same thresholds the analysis uses:
/// green is above average, red is close to the channel record.
fn heat_class(avg_viewers: u32) -> &'static str {
    if avg_viewers > 2200 {
        "heat-4"
    } else if avg_viewers > 2000 {
        "heat-3"
    } else if avg_viewers > 1800 {
        "heat-2"
    } else if avg_viewers > 1600 {
        "heat-1"
    } else {
        "heat-0"
    }
}

fn short_game_list(game: &str) -> String {
    let games: Vec<&str> = game.split(',').map(str::trim).collect();
    if games.len() > 4 {
        format!("{}…", games[..4].join(", "))
    } else {
        games.join(", ")
    }
}

fn month_index_json(months: &[CalendarMonth]) -> String {
    let mut index: BTreeMap<i32, Vec<u32>> = BTreeMap::new();
    for month in months {
        index.entry(month.year).or_default().push(month.month);
    }
    serde_json::to_string(&index).unwrap_or_else(|_| "{}".to_string())
}

fn hero_nav(active: Page) -> String {
    let tabs = [
        (
            Page::Insights,
            "/",
            "Аналитика",
            "Ключевые инсайты и графики",
        ),
        (
            Page::Schedule,
            "/schedule",
            "Прогноз",
            "Прогноз будущих стримов",
        ),
    ];

    let mut nav = String::from("<nav class=\"hero-nav\">");
    for (page, href, label, description) in tabs {
        let class = if page == active {
            "hero-tab active"
        } else {
            "hero-tab"
        };
        nav.push_str(&format!(
            "<a class=\"{class}\" href=\"{href}\"><span class=\"hero-tab-label\">{label}</span><span class=\"hero-tab-desc\">{description}</span></a>",
        ));
    }
    nav.push_str("</nav>");
    nav
}

fn call_to_action(active: Page) -> String {
    let (href, text) = match active {
        Page::Insights => ("/schedule", "прогноз трансляций"),
        Page::Schedule => ("/", "раздел аналитики"),
    };
    format!(
        "<footer class=\"cta\"><h2>Хочешь стать частью статистики?</h2><p>Присоединяйся к стримам, чтобы попасть в будущие аналитические отчёты и просто хорошо провести время.</p><p class=\"cta-cross\">А ещё загляни в наш <a href=\"{href}\">{text}</a>, если пропустил — там много интересного!</p><a class=\"cta-button\" href=\"https://www.twitch.tv/olesha\" target=\"_blank\" rel=\"noopener noreferrer\">На Twitch к Олёше!</a><p class=\"cta-note\">(в процессе создания этого сайта ни одна бабка не пострадала)</p></footer>",
    )
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const SITE_HEADER: &str = r##"<header id="site-header">
  <div class="site-header-inner">
    <a class="brand" href="/">Olesha Analytics</a>
    <nav>
      <a class="header-link active" href="/">Аналитика</a>
      <a class="header-link" href="/schedule">Расписание</a>
    </nav>
  </div>
</header>"##;

const REAL_FOOTER: &str = r##"<footer class="site-footer">
  <div class="site-footer-links">
    <a href="https://www.twitch.tv/olesha" target="_blank" rel="noopener noreferrer">Смотреть на Twitch</a>
    <a href="https://github.com/ZhenyaSSSS/olesha-analytics" target="_blank" rel="noopener noreferrer">GitHub</a>
  </div>
  <p>Сделано <a href="https://t.me/eugene_sautkin" target="_blank" rel="noopener noreferrer">Евгением Сауткиным (Eugene S)</a></p>
</footer>"##;

const INTRO: &str = r##"<div id="intro" class="intro">
  <p>В основе прогноза — <strong>ансамбль моделей</strong>. Каждая отвечала за свой параметр: средний онлайн, пиковый, продолжительность, игры и т. д. На обучение ушли почти сутки на Ryzen 9 9950X.</p>
  <p><em>Это не «пророчество»</em>: алгоритм не видит будущее, а лишь <strong>эмулирует вероятный сценарий</strong> по историческим данным. Особенно трудно угадать будущие <strong>игры</strong>: модель знает лишь то, что уже было, поэтому алгоритм подставляет самые близкие аналоги из прошлых стримов.</p>
  <p>Кликните на день, чтобы открыть детали справа. Цвет плитки показывает ожидаемую популярность: зелёный — выше среднего, красный — близко к рекорду.</p>
</div>"##;

const JUMP_BAR: &str = r##"<div class="jump-bar">
  <span>Быстрый переход:</span>
  <select id="jump-year" aria-label="Год"></select>
  <select id="jump-month" aria-label="Месяц"></select>
</div>"##;

const DAY_PANEL: &str = r##"<div id="panel-backdrop" class="panel-backdrop" hidden></div>
<aside id="day-panel" class="day-panel" hidden>
  <button id="panel-close" class="panel-close" type="button" aria-label="Закрыть">×</button>
  <h2 id="panel-title"></h2>
  <p id="panel-subtitle" class="panel-muted"></p>
  <div id="panel-body"></div>
</aside>"##;

const PAGE_SHELL: &str = r##"<!DOCTYPE html>
<html lang="ru" class="dark">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <meta name="description" content="{{DESCRIPTION}}" />
  <title>{{TITLE}}</title>
  <style>
    :root {
      --bg: #09090b;
      --panel: #18181b;
      --panel-2: #27272a;
      --line: #27272a;
      --ink: #fafafa;
      --muted: #a1a1aa;
      --faint: #71717a;
      --accent: #a78bfa;
    }

    * {
      box-sizing: border-box;
    }

    html {
      scroll-behavior: smooth;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Inter", "Segoe UI", "Helvetica Neue", sans-serif;
      line-height: 1.6;
    }

    h1, h2, h3 {
      line-height: 1.15;
      letter-spacing: -0.02em;
    }

    a {
      color: inherit;
    }

    strong {
      color: var(--accent);
    }

    .hero {
      border-bottom: 1px solid var(--line);
      background: rgba(9, 9, 11, 0.2);
    }

    .hero-inner {
      max-width: 1100px;
      margin: 0 auto;
      padding: 96px 24px 48px;
      text-align: center;
    }

    .hero-inner h1 {
      margin: 0;
      font-size: clamp(2.6rem, 6vw, 4.4rem);
      font-weight: 700;
    }

    .hero-sub {
      margin: 24px auto 0;
      max-width: 680px;
      color: var(--muted);
      font-size: 1.1rem;
    }

    .hero-nav {
      max-width: 1100px;
      margin: 0 auto;
      padding: 0 24px;
      display: flex;
      border-top: 1px solid var(--line);
    }

    .hero-tab {
      display: flex;
      flex-direction: column;
      gap: 2px;
      padding: 12px 16px;
      text-decoration: none;
      color: var(--muted);
      border-bottom: 2px solid transparent;
    }

    .hero-tab:hover {
      color: var(--ink);
    }

    .hero-tab.active {
      color: var(--ink);
      border-bottom-color: var(--accent);
    }

    .hero-tab-label {
      font-size: 0.9rem;
      font-weight: 600;
    }

    .hero-tab-desc {
      font-size: 0.75rem;
    }

    .cta {
      border-top: 1px solid var(--line);
      background: rgba(9, 9, 11, 0.2);
      text-align: center;
      padding: 48px 24px;
    }

    .cta h2 {
      margin: 0 0 16px;
      font-size: 1.6rem;
    }

    .cta p {
      max-width: 640px;
      margin: 0 auto 16px;
      color: var(--muted);
    }

    .cta-cross {
      font-size: 0.9rem;
    }

    .cta-cross a {
      text-decoration: underline;
    }

    .cta-cross a:hover {
      color: var(--ink);
    }

    .cta-button {
      display: inline-block;
      margin-top: 8px;
      padding: 14px 28px;
      border-radius: 10px;
      background: var(--accent);
      color: #0c0a14;
      font-weight: 700;
      font-size: 1.05rem;
      text-decoration: none;
    }

    .cta-button:hover {
      filter: brightness(1.1);
    }

    .cta-note {
      margin-top: 32px;
      font-size: 0.75rem;
      font-style: italic;
      color: var(--faint);
    }

    .site-footer {
      text-align: center;
      padding: 40px 24px;
      border-top: 1px solid var(--line);
      color: var(--muted);
      font-size: 0.85rem;
    }

    .site-footer-links {
      display: flex;
      justify-content: center;
      gap: 24px;
      margin-bottom: 16px;
    }

    .site-footer-links a {
      text-decoration: none;
    }

    .site-footer-links a:hover,
    .site-footer p a:hover {
      color: var(--accent);
    }

    {{PAGE_CSS}}
  </style>
</head>
<body>
{{BODY}}
<script>
{{PAGE_SCRIPT}}
</script>
</body>
</html>"##;

const INSIGHTS_CSS: &str = r##"#site-header {
      position: fixed;
      top: 0;
      left: 0;
      right: 0;
      z-index: 50;
      border-bottom: 1px solid var(--line);
      background: rgba(9, 9, 11, 0.85);
      backdrop-filter: blur(12px);
      transform: translateY(-100%);
      transition: transform 0.4s ease-in-out;
    }

    #site-header.visible {
      transform: translateY(0);
    }

    .site-header-inner {
      max-width: 1100px;
      margin: 0 auto;
      padding: 0 24px;
      height: 56px;
      display: flex;
      align-items: center;
      justify-content: space-between;
    }

    .brand {
      font-weight: 700;
      text-decoration: none;
    }

    .header-link {
      padding: 6px 12px;
      border-radius: 6px;
      font-size: 0.9rem;
      color: var(--muted);
      text-decoration: none;
    }

    .header-link:hover {
      background: var(--panel);
      color: var(--ink);
    }

    .header-link.active {
      background: var(--panel-2);
      color: var(--ink);
    }

    .insights {
      max-width: 1100px;
      margin: 0 auto;
      padding: 48px 24px;
      display: flex;
      flex-direction: column;
      gap: 72px;
    }

    .insight {
      display: grid;
      grid-template-columns: 5fr 7fr;
      gap: 48px;
      align-items: center;
    }

    .insight.reverse .insight-text {
      order: 2;
    }

    .insight.reverse .insight-figure {
      order: 1;
    }

    .insight-text h2 {
      margin: 0 0 20px;
      font-size: clamp(1.8rem, 3vw, 2.6rem);
    }

    .insight-text p {
      color: var(--muted);
      font-size: 1.05rem;
    }

    .checks {
      list-style: none;
      margin: 0;
      padding: 0;
      display: flex;
      flex-direction: column;
      gap: 16px;
      color: var(--muted);
    }

    .checks li {
      padding-left: 28px;
      position: relative;
    }

    .checks li::before {
      content: "✔";
      position: absolute;
      left: 0;
      color: var(--accent);
    }

    .insight-figure {
      margin: 0;
    }

    .insight-figure img {
      width: 100%;
      border-radius: 12px;
      background: rgba(24, 24, 27, 0.5);
      padding: 12px;
      cursor: zoom-in;
    }

    .insight-figure figcaption {
      margin-top: 8px;
      text-align: center;
      font-size: 0.75rem;
      color: var(--faint);
    }

    .info-card {
      border: 1px solid rgba(167, 139, 250, 0.25);
      border-radius: 14px;
      background: rgba(9, 9, 11, 0.7);
      padding: 24px;
    }

    .info-card h3 {
      margin: 0 0 12px;
      color: var(--accent);
      font-size: 1.2rem;
    }

    .bulb {
      margin-right: 10px;
    }

    .info-card p,
    .info-card li {
      color: var(--muted);
    }

    .info-card ul {
      margin: 8px 0 0;
      padding-left: 20px;
    }

    #lightbox {
      position: fixed;
      inset: 0;
      z-index: 100;
      background: rgba(0, 0, 0, 0.85);
      backdrop-filter: blur(8px);
      display: flex;
      align-items: center;
      justify-content: center;
      cursor: zoom-out;
      padding: 24px;
    }

    #lightbox[hidden] {
      display: none;
    }

    #lightbox img {
      max-width: 95vw;
      max-height: 90vh;
    }

    @media (max-width: 760px) {
      .insight {
        grid-template-columns: 1fr;
        gap: 24px;
      }

      .insight.reverse .insight-text {
        order: 1;
      }

      .insight.reverse .insight-figure {
        order: 2;
      }
    }"##;

const INSIGHTS_JS: &str = r##"const header = document.getElementById('site-header');
window.addEventListener('scroll', () => {
  header.classList.toggle('visible', window.scrollY > 300);
});

const lightbox = document.getElementById('lightbox');
const lightboxImg = document.getElementById('lightbox-img');
document.querySelectorAll('.insight-figure img').forEach((img) => {
  img.addEventListener('click', () => {
    lightboxImg.src = img.src;
    lightboxImg.alt = img.alt;
    lightbox.hidden = false;
  });
});
lightbox.addEventListener('click', () => {
  lightbox.hidden = true;
});
document.addEventListener('keydown', (event) => {
  if (event.key === 'Escape') {
    lightbox.hidden = true;
  }
});"##;

const SCHEDULE_CSS: &str = r##".schedule-top {
      position: sticky;
      top: 0;
      z-index: 20;
      border-bottom: 1px solid var(--line);
      background: rgba(9, 9, 11, 0.9);
      backdrop-filter: blur(12px);
    }

    .schedule-top-inner {
      max-width: 1100px;
      margin: 0 auto;
      padding: 24px 24px 8px;
      text-align: center;
    }

    .schedule-top-inner h1 {
      margin: 0;
      font-size: clamp(2rem, 4vw, 3.2rem);
    }

    .schedule-top .hero-sub {
      margin-top: 12px;
    }

    .intro-toggle {
      margin-top: 12px;
      background: none;
      border: none;
      color: var(--accent);
      font-size: 0.8rem;
      text-decoration: underline;
      cursor: pointer;
    }

    .intro {
      margin: 16px auto 8px;
      max-width: 1060px;
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 32px;
      text-align: center;
      font-size: 0.85rem;
      color: var(--muted);
    }

    .intro[hidden] {
      display: none;
    }

    .calendar {
      max-width: 1100px;
      margin: 0 auto;
      padding: 32px 24px 96px;
      display: flex;
      flex-direction: column;
      gap: 48px;
    }

    .calendar-error {
      text-align: center;
      color: var(--muted);
      padding: 64px 0;
    }

    .month h2 {
      margin: 0 0 20px;
      font-size: 1.8rem;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 4px;
    }

    .weekday {
      text-align: center;
      font-size: 0.72rem;
      font-weight: 600;
      color: var(--muted);
      padding-bottom: 8px;
    }

    .day {
      min-height: 108px;
      border-radius: 8px;
      border: 1px solid var(--line);
      background: var(--panel);
      color: var(--ink);
      font: inherit;
      text-align: left;
      padding: 8px;
      cursor: pointer;
      display: flex;
      flex-direction: column;
      transition: background 0.2s ease, border-color 0.2s ease;
    }

    .day.blank {
      background: none;
      border: none;
      cursor: default;
    }

    .day.empty:hover {
      background: var(--panel-2);
    }

    .day.today {
      border-color: #3b82f6;
      box-shadow: 0 0 0 2px #3b82f6;
    }

    .day-head {
      display: flex;
      justify-content: space-between;
      align-items: center;
      font-weight: 600;
    }

    .moon {
      font-size: 0.8rem;
      opacity: 0.7;
    }

    .day-games {
      margin-top: auto;
      font-size: 0.72rem;
      font-weight: 600;
      overflow: hidden;
    }

    .day-time {
      font-size: 0.72rem;
      opacity: 0.8;
    }

    .heat-0 {
      background: rgba(34, 197, 94, 0.8);
      border-color: #4ade80;
    }

    .heat-1 {
      background: rgba(132, 204, 22, 0.8);
      border-color: #a3e635;
    }

    .heat-2 {
      background: rgba(234, 179, 8, 0.8);
      border-color: #facc15;
      color: #1c1917;
    }

    .heat-3 {
      background: rgba(249, 115, 22, 0.8);
      border-color: #fb923c;
    }

    .heat-4 {
      background: rgba(239, 68, 68, 0.8);
      border-color: #f87171;
    }

    .heat-0:hover,
    .heat-1:hover,
    .heat-2:hover,
    .heat-3:hover,
    .heat-4:hover {
      filter: brightness(1.15);
    }

    .jump-bar {
      position: sticky;
      bottom: 0;
      z-index: 30;
      border-top: 1px solid var(--line);
      background: rgba(9, 9, 11, 0.95);
      backdrop-filter: blur(12px);
      display: flex;
      align-items: center;
      justify-content: center;
      gap: 16px;
      padding: 12px;
      font-size: 0.9rem;
    }

    .jump-bar select {
      background: var(--panel);
      color: var(--ink);
      border: 1px solid var(--panel-2);
      border-radius: 8px;
      padding: 8px 12px;
      font: inherit;
    }

    .panel-backdrop {
      position: fixed;
      inset: 0;
      z-index: 60;
      background: rgba(0, 0, 0, 0.6);
    }

    .panel-backdrop[hidden] {
      display: none;
    }

    .day-panel {
      position: fixed;
      top: 0;
      right: 0;
      bottom: 0;
      z-index: 70;
      width: min(440px, 100vw);
      background: rgba(9, 9, 11, 0.97);
      border-left: 1px solid var(--line);
      padding: 32px 24px;
      overflow-y: auto;
    }

    .day-panel[hidden] {
      display: none;
    }

    .panel-close {
      position: absolute;
      top: 12px;
      right: 16px;
      background: none;
      border: none;
      color: var(--muted);
      font-size: 1.6rem;
      cursor: pointer;
    }

    .panel-close:hover {
      color: var(--ink);
    }

    #panel-title {
      margin: 0 0 8px;
      font-size: 1.5rem;
    }

    .panel-muted {
      color: var(--muted);
      font-size: 0.9rem;
    }

    .panel-game {
      margin-top: 24px;
      padding: 16px;
      border-radius: 10px;
      background: var(--panel);
      border: 1px solid var(--panel-2);
    }

    .panel-game-title {
      margin: 0;
      font-size: 1.2rem;
      font-weight: 700;
    }

    .panel-game .panel-muted {
      margin: 4px 0 0;
    }

    .chips {
      margin-top: 16px;
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .chip {
      border-radius: 999px;
      padding: 4px 12px;
      font-size: 0.75rem;
      font-weight: 500;
    }

    .chip-night {
      background: rgba(99, 102, 241, 0.2);
      color: #a5b4fc;
      border: 1px solid rgba(99, 102, 241, 0.3);
    }

    .chip-weekend {
      background: rgba(245, 158, 11, 0.2);
      color: #fcd34d;
      border: 1px solid rgba(245, 158, 11, 0.3);
    }

    .panel-stats {
      margin-top: 24px;
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 12px;
    }

    .stat {
      border-radius: 10px;
      background: var(--panel);
      border: 1px solid var(--line);
      padding: 16px;
      text-align: center;
      display: flex;
      flex-direction: column;
      gap: 4px;
    }

    .stat-value {
      font-weight: 600;
    }

    .stat-label {
      font-size: 0.72rem;
      color: var(--faint);
    }

    .panel-note {
      margin-top: 32px;
      text-align: center;
      font-size: 0.75rem;
      color: var(--faint);
    }

    .panel-empty {
      text-align: center;
      padding: 48px 0;
    }

    .panel-empty-title {
      font-size: 1.5rem;
      font-weight: 700;
      color: #d4d4d8;
      margin: 0 0 8px;
    }

    @media (max-width: 760px) {
      .intro {
        grid-template-columns: 1fr;
        gap: 12px;
      }

      .day {
        min-height: 72px;
      }

      .day-games {
        display: none;
      }
    }"##;

const SCHEDULE_JS: &str = r##"const MONTH_NAMES = ['Январь', 'Февраль', 'Март', 'Апрель', 'Май', 'Июнь', 'Июль', 'Август', 'Сентябрь', 'Октябрь', 'Ноябрь', 'Декабрь'];
const MONTH_NAMES_GEN = ['января', 'февраля', 'марта', 'апреля', 'мая', 'июня', 'июля', 'августа', 'сентября', 'октября', 'ноября', 'декабря'];
const WEEKDAY_NAMES = ['воскресенье', 'понедельник', 'вторник', 'среда', 'четверг', 'пятница', 'суббота'];

const monthIndex = JSON.parse(document.getElementById('month-index').textContent || '{}');

const toggle = document.getElementById('intro-toggle');
const intro = document.getElementById('intro');
toggle.addEventListener('click', () => {
  intro.hidden = !intro.hidden;
  toggle.textContent = intro.hidden ? 'Показать описание' : 'Скрыть описание';
});

const yearSelect = document.getElementById('jump-year');
const monthSelect = document.getElementById('jump-month');

const fillSelect = (select, entries) => {
  select.innerHTML = '';
  entries.forEach(([value, label]) => {
    const option = document.createElement('option');
    option.value = value;
    option.textContent = label;
    select.appendChild(option);
  });
};

const fillMonths = (year) => {
  const months = monthIndex[year] || [];
  fillSelect(monthSelect, months.map((m) => [String(m), MONTH_NAMES[m - 1]]));
};

const jumpTo = (year, month) => {
  const section = document.getElementById(`month-${year}-${month}`);
  if (section) {
    section.scrollIntoView({ behavior: 'smooth', block: 'start' });
  }
};

const years = Object.keys(monthIndex);
if (years.length) {
  fillSelect(yearSelect, years.map((y) => [y, y]));
  fillMonths(years[0]);
}

yearSelect.addEventListener('change', () => {
  fillMonths(yearSelect.value);
  const first = (monthIndex[yearSelect.value] || [])[0];
  if (first) {
    monthSelect.value = String(first);
    jumpTo(yearSelect.value, first);
  }
});

monthSelect.addEventListener('change', () => {
  jumpTo(yearSelect.value, monthSelect.value);
});

const panel = document.getElementById('day-panel');
const backdrop = document.getElementById('panel-backdrop');
const panelTitle = document.getElementById('panel-title');
const panelSubtitle = document.getElementById('panel-subtitle');
const panelBody = document.getElementById('panel-body');

const closePanel = () => {
  panel.hidden = true;
  backdrop.hidden = true;
};

const capitalize = (s) => (s && s.charAt(0).toUpperCase() + s.slice(1)) || '';

const esc = (value) => {
  const div = document.createElement('div');
  div.textContent = value;
  return div.innerHTML;
};

const formatDate = (iso) => {
  const [year, month, day] = iso.split('-').map(Number);
  return `${day} ${MONTH_NAMES_GEN[month - 1]} ${year} г.`;
};

const weekdayOf = (iso) => WEEKDAY_NAMES[new Date(`${iso}T12:00:00`).getDay()];

const showDay = (data) => {
  if (data.has_stream) {
    const s = data.stream;
    panelTitle.textContent = `Прогноз на ${formatDate(data.date)}`;
    panelSubtitle.textContent = `${capitalize(weekdayOf(data.date))}, ${s.season}`;

    const chips = [];
    if (s.is_night_stream) {
      chips.push('<span class="chip chip-night">🌙 Ночной стрим</span>');
    }
    if (s.is_weekend) {
      chips.push('<span class="chip chip-weekend">📅 Выходной день</span>');
    }

    panelBody.innerHTML = `
      <div class="panel-game">
        <p class="panel-game-title">${esc(s.game)}</p>
        <p class="panel-muted">Основная категория стрима</p>
      </div>
      ${chips.length ? `<div class="chips">${chips.join('')}</div>` : ''}
      <div class="panel-stats">
        <div class="stat"><span class="stat-value">${esc(s.start_time)} – ${esc(s.end_time)}</span><span class="stat-label">(~${s.duration_hours.toFixed(1)} ч.)</span></div>
        <div class="stat"><span class="stat-value">~${s.predicted_avg_viewers}</span><span class="stat-label">зрителей</span></div>
        <div class="stat"><span class="stat-value">~${s.predicted_followers_gain}</span><span class="stat-label">фолловеров</span></div>
        <div class="stat"><span class="stat-value">~${s.predicted_peak_viewers}</span><span class="stat-label">в пике</span></div>
      </div>
      <p class="panel-note">⚠ Все данные являются результатом работы нейросети и могут быть неточными.</p>`;
  } else {
    panelTitle.textContent = 'Нет стрима';
    panelSubtitle.textContent = 'В этот день стрим не запланирован. Может, отдохнем?';
    panelBody.innerHTML = `
      <div class="panel-empty">
        <p class="panel-empty-title">No streams :(</p>
        <p class="panel-muted">Время косплеить работягу.</p>
      </div>`;
  }
  panel.hidden = false;
  backdrop.hidden = false;
};

document.querySelectorAll('.day[data-date]').forEach((cell) => {
  cell.addEventListener('click', async () => {
    try {
      const res = await fetch(`/api/day/${cell.dataset.date}`);
      if (!res.ok) {
        throw new Error(`day lookup failed: ${res.status}`);
      }
      showDay(await res.json());
    } catch (err) {
      console.error(err);
    }
  });
});

document.getElementById('panel-close').addEventListener('click', closePanel);
backdrop.addEventListener('click', closePanel);
document.addEventListener('keydown', (event) => {
  if (event.key === 'Escape') {
    closePanel();
  }
});"##;

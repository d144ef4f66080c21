//! Static narrative for the insights landing page. All numbers here were
//! produced by the offline analysis; the site only presents them.
//!
//! Strings may carry inline markup (`<strong>`, `<b>`, `<br/>`), which the
//! renderer injects verbatim.

pub struct Figure {
    pub src: &'static str,
    pub alt: &'static str,
}

/// A narrative section paired with its chart image. `bullets` renders as a
/// checklist under the paragraphs; `reverse` flips text and image columns.
pub struct InsightSection {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub bullets: &'static [&'static str],
    pub figure: Figure,
    pub reverse: bool,
}

/// A short methodology explainer shown between sections.
pub struct InfoCard {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub bullets: &'static [&'static str],
}

pub enum Block {
    Section(InsightSection),
    Card(InfoCard),
}

pub const INSIGHT_BLOCKS: &[Block] = &[
    Block::Card(InfoCard {
        title: "Интерактивные графики",
        paragraphs: &[
            "Все графики на этой странице — интерактивны. Нажмите на любой из них, чтобы открыть увеличенную версию для детального изучения.",
        ],
        bullets: &[],
    }),
    Block::Section(InsightSection {
        title: "Расписание:<br/>предсказуемый дневной пик",
        paragraphs: &[
            "Большинство стримов (<strong>91.6%</strong>) начинаются днем, с пиком около <strong>12:30</strong>. Ночные стримы — редкость, что говорит о стабильном графике. На графике показано распределение времени начала всех стримов.",
        ],
        bullets: &[],
        figure: Figure {
            src: "/images/olesha_analysis_basic.png",
            alt: "Распределение времени начала",
        },
        reverse: false,
    }),
    Block::Section(InsightSection {
        title: "Стабильность и циклические сбои",
        paragraphs: &[],
        bullets: &[
            "<b>Период стабильности:</b> С 6 января по 18 марта 2023 года стримы начинались почти в одно и то же время, около <strong>12:40</strong>. Вы можете увидеть этот плотный кластер на графике.",
            "<b>Циклические сбои:</b> Примерно раз в месяц (каждые <strong>23-30</strong> стримов) происходят резкие сдвиги во времени начала. Это указывает на наличие определенного ритма в «хаосе».",
        ],
        figure: Figure {
            src: "/images/timeline_streams_beautiful.png",
            alt: "Карта всех стримов",
        },
        reverse: true,
    }),
    Block::Section(InsightSection {
        title: "Анализ сбоев режима",
        paragraphs: &[
            "На этом графике показаны все отклонения времени начала стримов от среднего значения. Красные треугольники — это «крупные нарушения», когда стрим начинался на 6 и более часов позже или раньше обычного. Видно, что такие сбои происходят регулярно, но без очевидной сезонности, в то время как «обычные» сдвиги (желтая линия) имеют свои циклы.",
        ],
        bullets: &[],
        figure: Figure {
            src: "/images/schedule_disruption_beautiful.png",
            alt: "Сдвиги времени начала стримов",
        },
        reverse: false,
    }),
    Block::Card(InfoCard {
        title: "Что такое «Корреляция»?",
        paragraphs: &[
            "Это показатель того, как два параметра связаны друг с другом. Коэффициент <strong>0.83</strong> (как у длительности стрима и времени просмотра) означает очень сильную связь: когда один растет, почти всегда растет и другой. Это помогает понять, какие рычаги сильнее всего влияют на результат.",
        ],
        bullets: &[],
    }),
    Block::Section(InsightSection {
        title: "Ключевые факторы роста",
        paragraphs: &[],
        bullets: &[
            "<b>Длительность — главный драйвер.</b> Сильная положительная корреляция с общим временем просмотра (коэффициент <strong>0.83</strong>) и приростом подписчиков (<strong>0.64</strong>). Проще говоря, чем дольше стрим, тем больше его смотрят.",
            "<b>Время начала имеет значение.</b> Небольшая, но заметная отрицательная корреляция (<strong>-0.3</strong>) между временем начала и средним числом зрителей. Это значит, что более ранние стримы (ближе к полудню) как правило привлекают немного больше зрителей.",
        ],
        figure: Figure {
            src: "/images/correlation_heatmap.png",
            alt: "Тепловая карта корреляций",
        },
        reverse: false,
    }),
    Block::Section(InsightSection {
        title: "Магия выходных и сезонность",
        paragraphs: &[],
        bullets: &[
            "<b>Магия выходных.</b> Выходные дни стабильно собирают больше зрителей, в то время как понедельник — самый слабый день. Ранние стримы (<strong>11:00-13:00</strong>) также привлекают больше зрителей.",
            "<b>Сезонность.</b> Пик зрительской активности приходится на август, а спад — на апрель. Разница в среднем количестве зрителей между этими месяцами составляет <strong>32.5%</strong>.",
        ],
        figure: Figure {
            src: "/images/avg_viewers_by_day.png",
            alt: "Среднее количество зрителей по дням недели",
        },
        reverse: true,
    }),
    Block::Section(InsightSection {
        title: "Общая картина: дашборд статистики",
        paragraphs: &[
            "Этот дашборд объединяет несколько ключевых метрик: от динамики зрителей до распределения длительности. Он наглядно показывает, что категория Just Chatting доминирует, являясь частью практически каждого стрима. При этом разница в среднем количестве зрителей между играми и «болтовней» статистически незначима (всего 1.2%), что подчеркивает важность самой личности стримера, а не только контента.",
        ],
        bullets: &[],
        figure: Figure {
            src: "/images/viewer_stats_dashboard.png",
            alt: "Полная статистика стримов OLESHA",
        },
        reverse: true,
    }),
    Block::Card(InfoCard {
        title: "Что такое «Кластеры»?",
        paragraphs: &[
            "Кластерный анализ автоматически находит группы похожих стримов (например, «короткие будничные» или «длинные выходные»), помогая увидеть скрытую структуру в вашем контенте и понять, какие «форматы» у вас есть.",
        ],
        bullets: &[],
    }),
    Block::Section(InsightSection {
        title: "Четыре архетипа стримов",
        paragraphs: &[
            "Анализ выделил 4 основных «архетипа» стримов на основе их характеристик. Это показывает, что у канала есть четкая структура: регулярные стримы для поддержания активности, стримы выходного дня для максимального онлайна и редкие марафоны для роста аудитории.",
        ],
        bullets: &[
            "<b>«Стандартные будничные» (484 стрима):</b> Основа канала. Проходят в будни, длятся в среднем <strong>5.5 часов</strong>, собирают стабильную, но базовую аудиторию (<strong>~1300</strong> зрителей).",
            "<b>«Прайм-тайм выходного дня» (326 стримов):</b> Самые популярные. Проходят в выходные, длятся дольше (<strong>~6.5 часов</strong>) и привлекают наибольшее количество зрителей (<strong>~1830</strong>).",
            "<b>«Длинные марафоны» (124 стрима):</b> Редкие, но очень длинные (<strong>11+ часов</strong>). Не всегда собирают пиковый онлайн, но очень эффективно привлекают новых подписчиков (в среднем <strong>+220</strong> за стрим).",
            "<b>«Аномальный рост» (1 стрим):</b> Уникальный стрим с аномально высоким приростом подписчиков (<strong>&gt;5000</strong>), выделенный алгоритмом как статистический выброс.",
        ],
        figure: Figure {
            src: "/images/stream_clusters.png",
            alt: "Кластеры стримов",
        },
        reverse: false,
    }),
    Block::Card(InfoCard {
        title: "Что такое «Статистический выброс»?",
        paragraphs: &[
            "Это значение, которое сильно отличается от остальных в наборе данных. В нашем случае, это стрим с аномально высоким приростом подписчиков, который не вписывается в общую картину. Такие выбросы часто указывают на уникальные, очень успешные события, которые стоит изучить отдельно.",
        ],
        bullets: &[],
    }),
    Block::Card(InfoCard {
        title: "Как работает прогноз?",
        paragraphs: &[
            "Эти графики — не просто предположения. Они построены с помощью математических моделей (SARIMA), которые анализируют исторические данные, находят в них закономерности (такие как тренды и сезонность) и продлевают их в будущее. Это позволяет получить статистически вероятный сценарий развития.",
        ],
        bullets: &[],
    }),
    Block::Section(InsightSection {
        title: "Прогнозы: Эволюция канала",
        paragraphs: &[
            "Модель не только предсказывает отдельные стримы, но и показывает долгосрочные тренды. К 2028 году ожидается смещение времени начала на более позднее, а среднее количество зрителей продолжит расти. Анализ сезонности показывает, что пик «нарушений режима» приходится на весну, а популярность игр циклична.",
        ],
        bullets: &[],
        figure: Figure {
            src: "/images/predictions_beautiful.png",
            alt: "Дашборд с прогнозами",
        },
        reverse: true,
    }),
    Block::Card(InfoCard {
        title: "Что такое «Декомпозиция»?",
        paragraphs: &[
            "Этот метод разделяет сложный график (например, количество зрителей) на три простых компонента:",
        ],
        bullets: &[
            "<b>Тренд:</b> Общее направление движения (рост или падение в долгосрочной перспективе).",
            "<b>Сезонность:</b> Регулярные, предсказуемые циклы (например, еженедельные пики по выходным).",
            "<b>Аномалии:</b> Уникальные, непредсказуемые всплески или падения, которые остались после вычета тренда и сезонности.",
        ],
    }),
    Block::Section(InsightSection {
        title: "Анализ зрителей: тренд, сезонность и аномалии",
        paragraphs: &[
            "Декомпозиция временных рядов позволяет заглянуть «под капот» графика зрителей. Долгосрочный тренд — уверенный рост. Есть стабильные недельные циклы и аномальные всплески, которые указывают на уникальные события.",
            "Эти даты — точки для дальнейшего исследования. Анализ того, что происходило на стримах в эти дни, может дать ключ к пониманию самых эффективных (и неэффективных) форматов.",
        ],
        bullets: &[
            "<b>Топ-3 дня успеха:</b> 2022-05-28 (+2842 сверх нормы), 2023-06-24 (+2476), 2022-08-06 (+2365).",
            "<b>Топ-3 дня провала:</b> 2022-02-21 (-1160 от нормы), 2022-02-22 (-928), 2024-01-25 (-758).",
        ],
        figure: Figure {
            src: "/images/viewers_decomposition.png",
            alt: "Декомпозиция зрителей",
        },
        reverse: false,
    }),
    Block::Section(InsightSection {
        title: "Анализ расписания: предсказуемый хаос",
        paragraphs: &[
            "Анализ времени начала стримов доказывает: сбои режима цикличны. График четко показывает <b>30-дневный цикл «плавающего» расписания</b>. В течение месяца время старта постепенно смещается на 2-3 часа, после чего происходит резкий «сброс» к раннему началу.",
            "Этот анализ доказывает, что «хаос» в расписании на самом деле является сложной, но предсказуемой системой. Ниже — самые экстремальные сбои.",
        ],
        bullets: &[
            "<b>Раннее начало:</b> 2022-02-26 (на <strong>6.7ч</strong> раньше), 2021-04-24 (на <strong>6.1ч</strong> раньше).",
            "<b>Позднее начало:</b> 2022-07-20 (на <strong>8.6ч</strong> позже), 2023-08-10 (на <strong>8.4ч</strong> позже).",
        ],
        figure: Figure {
            src: "/images/start_time_decomposition.png",
            alt: "Декомпозиция времени начала",
        },
        reverse: true,
    }),
];

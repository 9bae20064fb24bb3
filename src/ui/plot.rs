use eframe::egui::{self, Align2, Color32, RichText, ScrollArea, Stroke, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{
    Bar, BarChart, GridMark, HLine, Legend, Line, LineStyle, Plot, PlotPoint, PlotPoints, Points,
    Polygon, Text,
};

use crate::charts::catch_rate::CatchRateRows;
use crate::charts::category::{max_mean, CategoryStats};
use crate::charts::combinations::TypeCombinations;
use crate::charts::gender::GenderSlice;
use crate::charts::generation::TypesByGeneration;
use crate::charts::strength::{AvgStrengthByType, StrongestEntry};
use crate::charts::top::TopEntry;
use crate::color::{category_color, dual_type_color, gender_color, type_color};
use crate::data::model::Stat;
use crate::state::AppState;
use crate::stats::aggregate::group_by;
use crate::stats::score::{total_strength, StrengthMode};
use crate::ui::geometry::{pie_angles, pie_slice, polar, radar_points};

const CHART_HEIGHT: f32 = 280.0;

// ---------------------------------------------------------------------------
// Dashboard grid (central panel)
// ---------------------------------------------------------------------------

/// Render all eight charts in two columns.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Nenhum dado carregado  (Arquivo → Abrir…)");
        });
        return;
    }

    let rows = &state.rows;
    let mode = state.mode();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.columns(2, |cols| {
                card(&mut cols[0], "Tipos por Geração", |ui| {
                    types_by_generation(ui, &rows.types_by_generation)
                });
                card(&mut cols[1], "Força Média por Tipo", |ui| {
                    avg_strength(ui, &rows.avg_strength)
                });
                card(&mut cols[0], &format!("Top 10 – {}", mode.label()), |ui| {
                    top_pokemon(ui, &rows.top, mode)
                });
                card(&mut cols[1], "Facilidade de Captura vs. Força", |ui| {
                    catch_rate(ui, &rows.catch_rate)
                });
                card(&mut cols[0], "Combinações de Tipos", |ui| {
                    type_combinations(ui, &rows.combinations)
                });
                card(&mut cols[1], "Status por Categoria", |ui| {
                    category_radar(ui, &rows.categories)
                });
                card(&mut cols[0], "Distribuição de Gênero", |ui| {
                    gender_pie(ui, &rows.gender)
                });
                card(&mut cols[1], "Mais Fortes por Tipo e Geração", |ui| {
                    strongest(ui, &rows.strongest)
                });
            });
        });
}

fn card(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui)) {
    ui.group(|ui: &mut Ui| {
        ui.strong(title);
        add_contents(ui);
    });
    ui.add_space(8.0);
}

fn base_plot(id: &str) -> Plot<'static> {
    Plot::new(id.to_owned())
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
}

/// Axis formatter that names integer positions from `labels`.
fn category_axis(labels: Vec<String>) -> impl Fn(GridMark, &std::ops::RangeInclusive<f64>) -> String {
    move |mark, _range| {
        let rounded = mark.value.round();
        if (mark.value - rounded).abs() > 1e-6 || rounded < 0.0 {
            return String::new();
        }
        labels.get(rounded as usize).cloned().unwrap_or_default()
    }
}

fn no_data(ui: &mut Ui) {
    ui.allocate_ui(egui::vec2(ui.available_width(), CHART_HEIGHT), |ui: &mut Ui| {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("Sem dados para os filtros atuais.");
        });
    });
}

// ---------------------------------------------------------------------------
// 1. Stacked bars: primary types per generation
// ---------------------------------------------------------------------------

fn types_by_generation(ui: &mut Ui, rows: &TypesByGeneration) {
    if rows.generations.is_empty() {
        return no_data(ui);
    }

    let mut layers: Vec<BarChart> = Vec::with_capacity(rows.types.len());
    for (t, ty) in rows.types.iter().enumerate() {
        let bars: Vec<Bar> = rows
            .generations
            .iter()
            .enumerate()
            .map(|(g, generation)| {
                Bar::new(g as f64, rows.counts[g][t] as f64)
                    .width(0.7)
                    .name(format!("Geração {generation} – {ty}"))
            })
            .collect();
        let below: Vec<&BarChart> = layers.iter().collect();
        let layer = BarChart::new(bars)
            .name(ty)
            .color(type_color(ty))
            .stack_on(&below);
        layers.push(layer);
    }

    let labels = rows.generations.iter().map(|g| format!("Gen {g}")).collect();
    base_plot("types_by_generation")
        .legend(Legend::default())
        .x_axis_formatter(category_axis(labels))
        .y_axis_label("Quantidade de Pokémon")
        .include_y(rows.max_total() as f64)
        .show(ui, |plot_ui| {
            for layer in layers {
                plot_ui.bar_chart(layer);
            }
        });
}

// ---------------------------------------------------------------------------
// 2. Bars: mean total points per primary type
// ---------------------------------------------------------------------------

fn avg_strength(ui: &mut Ui, rows: &AvgStrengthByType) {
    if rows.rows.is_empty() {
        return no_data(ui);
    }

    let bars: Vec<Bar> = rows
        .rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let stats: Vec<String> = Stat::ALL
                .iter()
                .zip(r.avg_stats)
                .map(|(s, v)| format!("{}: {}", s.label(), v.round()))
                .collect();
            Bar::new(i as f64, r.avg_total)
                .width(0.7)
                .fill(type_color(&r.type_1))
                .name(format!("{} ({} Pokémon)\n{}", r.type_1, r.count, stats.join("\n")))
        })
        .collect();

    let labels = rows.rows.iter().map(|r| r.type_1.clone()).collect();
    let overall = rows.overall;
    base_plot("avg_strength")
        .legend(Legend::default())
        .x_axis_formatter(category_axis(labels))
        .y_axis_label("Pontos Totais Médios")
        .include_y(0.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Pontos Totais Médios"));
            plot_ui.hline(
                HLine::new(overall)
                    .color(Color32::RED)
                    .width(2.0)
                    .style(LineStyle::dashed_loose())
                    .name(format!("Média: {}", overall.round())),
            );
        });
}

// ---------------------------------------------------------------------------
// 3. Horizontal bars: top 10 by offensive / defensive strength
// ---------------------------------------------------------------------------

fn top_pokemon(ui: &mut Ui, rows: &[TopEntry], mode: StrengthMode) {
    if rows.is_empty() {
        return no_data(ui);
    }

    // Rank 1 at the top.
    let n = rows.len();
    let bars: Vec<Bar> = rows
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let r = &e.record;
            Bar::new((n - 1 - i) as f64, e.strength)
                .width(0.7)
                .fill(type_color(&r.type_1))
                .name(format!(
                    "{}\nHP {} · Atk {} · Def {} · SpA {} · SpD {} · Vel {}\nSoma dos status: {}",
                    r.name,
                    r.hp,
                    r.attack,
                    r.defense,
                    r.sp_attack,
                    r.sp_defense,
                    r.speed,
                    total_strength(r)
                ))
        })
        .collect();

    let labels = rows.iter().rev().map(|e| e.record.name.clone()).collect();
    base_plot("top_pokemon")
        .y_axis_formatter(category_axis(labels))
        .x_axis_label(mode.label())
        .include_x(0.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

// ---------------------------------------------------------------------------
// 4. Scatter: catch rate vs total points, with trend line
// ---------------------------------------------------------------------------

fn catch_rate(ui: &mut Ui, rows: &CatchRateRows) {
    if rows.points.is_empty() {
        return no_data(ui);
    }

    let corr = if rows.correlation.is_nan() {
        "Correlação: –".to_string()
    } else {
        format!("Correlação: {:.2}", rows.correlation)
    };
    ui.label(RichText::new(corr).small());

    let by_type = group_by(&rows.points, |p| p.type_1.clone());
    base_plot("catch_rate")
        .x_axis_label("Força Total (Pontos)")
        .y_axis_label("Taxa de Captura")
        .include_x(0.0)
        .include_y(0.0)
        .show(ui, |plot_ui| {
            for (ty, points) in by_type {
                let series: Vec<[f64; 2]> = points
                    .iter()
                    .map(|p| [p.total_points, p.catch_rate])
                    .collect();
                plot_ui.points(
                    Points::new(series)
                        .name(&ty)
                        .color(type_color(&ty).gamma_multiply(0.7))
                        .radius(3.0)
                        .filled(true),
                );
            }
            if let Some(trend) = rows.trend {
                plot_ui.line(
                    Line::new(PlotPoints::from(vec![trend.from, trend.to]))
                        .name("Tendência")
                        .color(Color32::RED)
                        .width(2.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// 5. Bars: most common type pairs, plus the rarest pairs as a table
// ---------------------------------------------------------------------------

fn type_combinations(ui: &mut Ui, rows: &TypeCombinations) {
    if rows.ranked.is_empty() {
        return no_data(ui);
    }

    let top = rows.most_common();
    let bars: Vec<Bar> = top
        .iter()
        .enumerate()
        .map(|(i, c)| {
            Bar::new(i as f64, c.count as f64)
                .width(0.7)
                .fill(dual_type_color(&c.primary, Some(&c.secondary)))
                .name(c.label())
        })
        .collect();

    let labels = top.iter().map(|c| c.label()).collect();
    base_plot("type_combinations")
        .x_axis_formatter(category_axis(labels))
        .y_axis_label("Quantidade de Pokémon")
        .include_y(0.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });

    ui.add_space(4.0);
    ui.strong("Combinações mais raras:");
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder())
        .header(18.0, |mut header| {
            header.col(|ui| {
                ui.strong("Primário");
            });
            header.col(|ui| {
                ui.strong("Secundário");
            });
            header.col(|ui| {
                ui.strong("Quantidade");
            });
        })
        .body(|mut body| {
            for c in rows.rarest() {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(RichText::new(&c.primary).color(type_color(&c.primary)));
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(&c.secondary).color(type_color(&c.secondary)));
                    });
                    row.col(|ui| {
                        ui.label(format!("{} Pokémon", c.count));
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// 6. Radar: mean stats per rarity category
// ---------------------------------------------------------------------------

fn category_radar(ui: &mut Ui, rows: &[CategoryStats]) {
    let max = max_mean(rows) * 1.1;
    if max <= 0.0 {
        return no_data(ui);
    }
    let n_axes = Stat::ALL.len();

    base_plot("category_radar")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .include_x(-1.35)
        .include_x(1.35)
        .include_y(-1.2)
        .include_y(1.2)
        .show(ui, |plot_ui| {
            // Rings and spokes
            let grid = Stroke::new(1.0, Color32::from_gray(170));
            for level in 1..=5 {
                let ring = radar_points(&[1.0; 64], 1.0, level as f64 / 5.0);
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(ring))
                        .stroke(grid)
                        .fill_color(Color32::TRANSPARENT),
                );
            }
            for (i, stat) in Stat::ALL.iter().enumerate() {
                let angle = std::f64::consts::TAU * i as f64 / n_axes as f64;
                plot_ui.line(
                    Line::new(PlotPoints::from(vec![[0.0, 0.0], polar(1.0, angle)]))
                        .color(Color32::from_gray(170))
                        .width(1.0),
                );
                let [x, y] = polar(1.15, angle);
                plot_ui.text(Text::new(PlotPoint::new(x, y), stat.label()).anchor(Align2::CENTER_CENTER));
            }
            plot_ui.text(
                Text::new(PlotPoint::new(0.02, 1.0), format!("{}", max.round()))
                    .anchor(Align2::LEFT_BOTTOM),
            );

            for c in rows {
                let color = category_color(c.category);
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(radar_points(&c.means, max, 1.0)))
                        .name(format!("{} ({} Pokémon)", c.category.label(), c.count))
                        .fill_color(color.gamma_multiply(0.4))
                        .stroke(Stroke::new(2.0, color)),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// 7. Pie: gender buckets
// ---------------------------------------------------------------------------

fn gender_pie(ui: &mut Ui, slices: &[GenderSlice]) {
    if slices.iter().all(|s| s.count == 0) {
        return no_data(ui);
    }

    let shares: Vec<f64> = slices.iter().map(|s| s.count as f64).collect();
    let angles = pie_angles(&shares);

    base_plot("gender_pie")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .include_x(-1.8)
        .include_x(1.8)
        .include_y(-1.2)
        .include_y(1.2)
        .show(ui, |plot_ui| {
            for (slice, &(start, end)) in slices.iter().zip(&angles) {
                if slice.count == 0 {
                    continue;
                }
                let name = format!("{} ({:.1}%)", slice.bucket.label(), slice.percentage);
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(pie_slice(1.0, start, end)))
                        .name(format!("{name} – {} Pokémon", slice.count))
                        .fill_color(gender_color(slice.bucket))
                        .stroke(Stroke::new(2.0, Color32::WHITE)),
                );
                if slice.shows_label() {
                    let mid = (start + end) / 2.0;
                    let [x, y] = polar(1.1, mid);
                    let anchor = if x >= 0.0 {
                        Align2::LEFT_CENTER
                    } else {
                        Align2::RIGHT_CENTER
                    };
                    plot_ui.text(Text::new(PlotPoint::new(x, y), name).anchor(anchor));
                }
            }
        });
}

// ---------------------------------------------------------------------------
// 8. Horizontal bars: strongest per (type, generation)
// ---------------------------------------------------------------------------

fn strongest(ui: &mut Ui, rows: &[StrongestEntry]) {
    if rows.is_empty() {
        return no_data(ui);
    }

    let n = rows.len();
    let bars: Vec<Bar> = rows
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let types = match &e.type_2 {
                Some(t2) => format!("{}/{}", e.type_1, t2),
                None => e.type_1.clone(),
            };
            Bar::new((n - 1 - i) as f64, e.total_points)
                .width(0.7)
                .fill(dual_type_color(&e.type_1, e.type_2.as_deref()))
                .name(format!("{}\n{types}", e.label()))
        })
        .collect();

    let labels = rows.iter().rev().map(|e| e.label()).collect();
    base_plot("strongest")
        .y_axis_formatter(category_axis(labels))
        .x_axis_label("Pontos Totais")
        .include_x(0.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

//! Chart rendering using plotters (SVG output).
//!
//! Uses the SVG backend to avoid system font dependencies. Every renderer
//! accepts the canonical `.png` relative path from the report layout and
//! writes an `.svg` next to the same stem, returning the path actually
//! written. The output directory is always an explicit argument; there is
//! no implicit current-figure state.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_svg::SVGBackend;
use tracing::info;

use crate::tables::{self, ModelMetrics, QualityMetric};

type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Set2-style categorical palette, one entry per model.
const PALETTE: [RGBColor; 4] = [
    RGBColor(102, 194, 165),
    RGBColor(252, 141, 98),
    RGBColor(141, 160, 203),
    RGBColor(231, 138, 195),
];

/// Highlight colors for the best-model analysis charts.
const BEST_COLOR: RGBColor = RGBColor(252, 141, 98);
const OTHERS_COLOR: RGBColor = RGBColor(102, 194, 165);
const TIME_BAR_COLOR: RGBColor = RGBColor(44, 127, 184);
const TIME_BEST_COLOR: RGBColor = RGBColor(202, 0, 32);
const F1_LINE_COLOR: RGBColor = RGBColor(217, 95, 2);
const ACC_LINE_COLOR: RGBColor = RGBColor(231, 41, 138);

/// Render the whole comparison report into `out_dir` (and its
/// `gin_analysis` subdirectory). Returns every path written.
pub fn render_all(models: &[ModelMetrics], out_dir: &Path) -> Result<Vec<PathBuf>> {
    let best = tables::best_by_f1(models).context("empty metrics table")?;
    let analysis_dir = out_dir.join("gin_analysis");
    fs::create_dir_all(&analysis_dir)?;

    let written = vec![
        training_time_chart(models, &out_dir.join("1_training_time.png"))?,
        performance_metrics_chart(models, &out_dir.join("2_performance_metrics.png"))?,
        accuracy_chart(models, &out_dir.join("3_accuracy.png"))?,
        radar_chart(models, &out_dir.join("4_radar_chart.png"))?,
        combined_chart(models, &out_dir.join("5_combined_visualization.png"))?,
        gap_chart(models, best, &analysis_dir.join("gin_vs_others_gap.png"))?,
        spotlight_chart(best, &analysis_dir.join("gin_metrics_spotlight.png"))?,
        improvement_chart(
            models,
            best,
            &analysis_dir.join("gin_improvement_over_best_alternative.png"),
        )?,
        tradeoff_chart(
            models,
            best,
            &analysis_dir.join("gin_performance_vs_time_tradeoff.png"),
        )?,
        radar_spotlight_chart(models, best, &analysis_dir.join("gin_radar_spotlight.png"))?,
    ];

    info!(
        "wrote {} charts under {}",
        written.len(),
        out_dir.display()
    );
    Ok(written)
}

fn svg_path(path: &Path) -> PathBuf {
    if path.extension().map(|e| e == "png").unwrap_or(false) {
        path.with_extension("svg")
    } else {
        path.to_path_buf()
    }
}

fn with_backend<F>(path: &Path, size: (u32, u32), draw: F) -> Result<PathBuf>
where
    F: FnOnce(&Area<'_>) -> Result<()>,
{
    let svg = svg_path(path);
    let root = SVGBackend::new(&svg, size).into_drawing_area();
    root.fill(&WHITE)?;
    draw(&root)?;
    root.present()?;
    drop(root);
    Ok(svg)
}

fn draw_no_data(area: &Area<'_>) -> Result<()> {
    let (w, h) = area.dim_in_pixel();
    area.draw(&Text::new(
        "No data available",
        (w as i32 / 2 - 60, h as i32 / 2),
        ("sans-serif", 20).into_font().color(&BLACK),
    ))?;
    Ok(())
}

/// 1. Training time bar chart.
pub fn training_time_chart(models: &[ModelMetrics], path: &Path) -> Result<PathBuf> {
    with_backend(path, (800, 500), |root| draw_training_time(root, models))
}

fn draw_training_time(area: &Area<'_>, models: &[ModelMetrics]) -> Result<()> {
    if models.is_empty() {
        return draw_no_data(area);
    }

    let max_time = models
        .iter()
        .map(|m| m.training_time_min)
        .fold(1.0f64, f64::max);

    let mut chart = ChartBuilder::on(area)
        .caption("Training Time Comparison", ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0..models.len()).into_segmented(), 0f64..max_time * 1.2)?;

    chart
        .configure_mesh()
        .x_labels(models.len())
        .x_label_formatter(&|x| segment_label(x, models))
        .y_desc("Time (minutes)")
        .draw()?;

    chart.draw_series(models.iter().enumerate().map(|(i, m)| {
        Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), m.training_time_min),
            ],
            PALETTE[i % PALETTE.len()].filled(),
        )
    }))?;

    // data labels above each bar
    chart.draw_series(models.iter().enumerate().map(|(i, m)| {
        Text::new(
            format!("{:.0}", m.training_time_min),
            (
                SegmentValue::CenterOf(i),
                m.training_time_min + max_time * 0.04,
            ),
            ("sans-serif", 14).into_font(),
        )
    }))?;

    Ok(())
}

fn segment_label(x: &SegmentValue<usize>, models: &[ModelMetrics]) -> String {
    if let SegmentValue::CenterOf(i) = x {
        if *i < models.len() {
            return models[*i].name.to_string();
        }
    }
    String::new()
}

/// 2. Grouped bar chart over precision, recall, F1, and AUC-ROC.
pub fn performance_metrics_chart(models: &[ModelMetrics], path: &Path) -> Result<PathBuf> {
    with_backend(path, (900, 550), |root| {
        draw_performance_metrics(root, models)
    })
}

const GROUPED_METRICS: [QualityMetric; 4] = [
    QualityMetric::Precision,
    QualityMetric::Recall,
    QualityMetric::F1Score,
    QualityMetric::AucRoc,
];

fn draw_performance_metrics(area: &Area<'_>, models: &[ModelMetrics]) -> Result<()> {
    if models.is_empty() {
        return draw_no_data(area);
    }

    let groups = GROUPED_METRICS.len();
    let bar_width = 0.8 / models.len() as f64;

    let mut chart = ChartBuilder::on(area)
        .caption("Performance Metrics Comparison", ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..groups as f64, 0.9f64..1.0f64)?;

    chart
        .configure_mesh()
        .x_labels(0)
        .y_desc("Score")
        .draw()?;

    for (mi, model) in models.iter().enumerate() {
        let color = PALETTE[mi % PALETTE.len()];
        chart
            .draw_series(GROUPED_METRICS.iter().enumerate().map(|(gi, &metric)| {
                let x0 = gi as f64 + 0.1 + mi as f64 * bar_width;
                Rectangle::new(
                    [(x0, 0.9), (x0 + bar_width, model.quality(metric))],
                    color.filled(),
                )
            }))?
            .label(model.name)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
            });
    }

    // group labels along the baseline
    chart.draw_series(GROUPED_METRICS.iter().enumerate().map(|(gi, metric)| {
        Text::new(
            metric.label(),
            (gi as f64 + 0.3, 0.9035),
            ("sans-serif", 14).into_font(),
        )
    }))?;

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    Ok(())
}

/// 3. Accuracy bar chart.
pub fn accuracy_chart(models: &[ModelMetrics], path: &Path) -> Result<PathBuf> {
    with_backend(path, (800, 500), |root| draw_accuracy(root, models))
}

fn draw_accuracy(area: &Area<'_>, models: &[ModelMetrics]) -> Result<()> {
    if models.is_empty() {
        return draw_no_data(area);
    }

    let lo = models
        .iter()
        .map(|m| m.accuracy)
        .fold(f64::INFINITY, f64::min)
        - 0.006;
    let hi = models
        .iter()
        .map(|m| m.accuracy)
        .fold(f64::NEG_INFINITY, f64::max)
        + 0.007;

    let mut chart = ChartBuilder::on(area)
        .caption("Accuracy Comparison", ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0..models.len()).into_segmented(), lo..hi)?;

    chart
        .configure_mesh()
        .x_labels(models.len())
        .x_label_formatter(&|x| segment_label(x, models))
        .y_desc("Accuracy")
        .draw()?;

    chart.draw_series(models.iter().enumerate().map(|(i, m)| {
        Rectangle::new(
            [
                (SegmentValue::Exact(i), lo),
                (SegmentValue::Exact(i + 1), m.accuracy),
            ],
            PALETTE[i % PALETTE.len()].filled(),
        )
    }))?;

    chart.draw_series(models.iter().enumerate().map(|(i, m)| {
        Text::new(
            format!("{:.4}", m.accuracy),
            (SegmentValue::CenterOf(i), m.accuracy + 0.001),
            ("sans-serif", 14).into_font(),
        )
    }))?;

    Ok(())
}

/// 4. Radar chart of all five quality metrics, one polygon per model.
pub fn radar_chart(models: &[ModelMetrics], path: &Path) -> Result<PathBuf> {
    with_backend(path, (700, 700), |root| {
        let series: Vec<RadarSeries> = models
            .iter()
            .enumerate()
            .map(|(i, m)| RadarSeries {
                name: m.name.to_string(),
                values: QualityMetric::ALL.map(|q| m.quality(q)).to_vec(),
                color: PALETTE[i % PALETTE.len()],
            })
            .collect();
        draw_radar(root, "Model Comparison Radar Chart", &series)
    })
}

struct RadarSeries {
    name: String,
    values: Vec<f64>,
    color: RGBColor,
}

/// Map a quality score onto the radar's radial axis: the interesting band
/// for these models is [0.9, 1.0].
fn radar_radius(value: f64) -> f64 {
    ((value - 0.9) / 0.1).clamp(0.0, 1.0)
}

fn radar_point(metric_idx: usize, num_metrics: usize, radius: f64) -> (f64, f64) {
    let angle = std::f64::consts::FRAC_PI_2
        - metric_idx as f64 * std::f64::consts::TAU / num_metrics as f64;
    (radius * angle.cos(), radius * angle.sin())
}

fn draw_radar(area: &Area<'_>, title: &str, series: &[RadarSeries]) -> Result<()> {
    if series.is_empty() {
        return draw_no_data(area);
    }

    let n = QualityMetric::ALL.len();
    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 20))
        .margin(20)
        .build_cartesian_2d(-1.6f64..1.6f64, -1.4f64..1.4f64)?;

    // concentric grid rings and radial spokes
    for ring in [0.25, 0.5, 0.75, 1.0] {
        let points: Vec<(f64, f64)> = (0..=n).map(|k| radar_point(k % n, n, ring)).collect();
        chart.draw_series(std::iter::once(PathElement::new(points, BLACK.mix(0.2))))?;
    }
    for (k, metric) in QualityMetric::ALL.iter().enumerate() {
        let tip = radar_point(k, n, 1.0);
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(0.0, 0.0), tip],
            BLACK.mix(0.2),
        )))?;
        let (lx, ly) = radar_point(k, n, 1.12);
        chart.draw_series(std::iter::once(Text::new(
            metric.label(),
            (lx - 0.25, ly),
            ("sans-serif", 14).into_font(),
        )))?;
    }

    for entry in series {
        let mut points: Vec<(f64, f64)> = entry
            .values
            .iter()
            .enumerate()
            .map(|(k, &v)| radar_point(k, n, radar_radius(v)))
            .collect();
        points.push(points[0]);

        let color = entry.color;
        chart.draw_series(std::iter::once(Polygon::new(
            points.clone(),
            color.mix(0.1),
        )))?;
        chart
            .draw_series(std::iter::once(PathElement::new(
                points,
                color.stroke_width(2),
            )))?
            .label(entry.name.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    Ok(())
}

/// 5. All four comparison views in one 2x2 panel.
pub fn combined_chart(models: &[ModelMetrics], path: &Path) -> Result<PathBuf> {
    with_backend(path, (1400, 1100), |root| {
        let panels = root.split_evenly((2, 2));
        draw_training_time(&panels[0], models)?;
        draw_performance_metrics(&panels[1], models)?;
        draw_accuracy(&panels[2], models)?;

        let series: Vec<RadarSeries> = models
            .iter()
            .enumerate()
            .map(|(i, m)| RadarSeries {
                name: m.name.to_string(),
                values: QualityMetric::ALL.map(|q| m.quality(q)).to_vec(),
                color: PALETTE[i % PALETTE.len()],
            })
            .collect();
        draw_radar(&panels[3], "Model Comparison Radar Chart", &series)
    })
}

/// Best model vs the average of the rest, with the gap annotated per metric.
pub fn gap_chart(
    models: &[ModelMetrics],
    best: &ModelMetrics,
    path: &Path,
) -> Result<PathBuf> {
    with_backend(path, (900, 600), |root| {
        let others: Vec<&ModelMetrics> =
            models.iter().filter(|m| m.name != best.name).collect();

        let mut chart = ChartBuilder::on(root)
            .caption(
                format!("{} Performance vs. Average of Other Models", best.name),
                ("sans-serif", 20),
            )
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0f64..QualityMetric::ALL.len() as f64, 0.9f64..1.0f64)?;

        chart
            .configure_mesh()
            .x_labels(0)
            .y_desc("Score")
            .draw()?;

        for (si, (label, color)) in
            [(best.name, BEST_COLOR), ("Average of Others", OTHERS_COLOR)]
                .into_iter()
                .enumerate()
        {
            chart
                .draw_series(QualityMetric::ALL.iter().enumerate().map(|(gi, &metric)| {
                    let value = if si == 0 {
                        best.quality(metric)
                    } else {
                        tables::mean_quality(others.iter().copied(), metric)
                    };
                    let x0 = gi as f64 + 0.15 + si as f64 * 0.35;
                    Rectangle::new([(x0, 0.9), (x0 + 0.35, value)], color.filled())
                }))?
                .label(label)
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
                });
        }

        // metric names and the gap annotations
        chart.draw_series(QualityMetric::ALL.iter().enumerate().map(|(gi, metric)| {
            Text::new(
                metric.label(),
                (gi as f64 + 0.25, 0.9035),
                ("sans-serif", 14).into_font(),
            )
        }))?;
        chart.draw_series(QualityMetric::ALL.iter().enumerate().map(|(gi, &metric)| {
            let gap = best.quality(metric)
                - tables::mean_quality(others.iter().copied(), metric);
            Text::new(
                format!("+{gap:.4}"),
                (gi as f64 + 0.2, best.quality(metric) + 0.004),
                ("sans-serif", 13).into_font().color(&F1_LINE_COLOR),
            )
        }))?;

        chart
            .configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .draw()?;
        Ok(())
    })
}

/// The best model's own metrics, sorted ascending, as horizontal bars.
pub fn spotlight_chart(best: &ModelMetrics, path: &Path) -> Result<PathBuf> {
    with_backend(path, (800, 550), |root| {
        let mut entries: Vec<(QualityMetric, f64)> = QualityMetric::ALL
            .iter()
            .map(|&q| (q, best.quality(q)))
            .collect();
        entries.sort_by(|a, b| a.1.total_cmp(&b.1));

        let lo = entries.first().map(|e| e.1).unwrap_or(0.0) - 0.004;
        let hi = entries.last().map(|e| e.1).unwrap_or(1.0) + 0.004;

        let mut chart = ChartBuilder::on(root)
            .caption(
                format!("{} Model - Performance Metrics Breakdown", best.name),
                ("sans-serif", 20),
            )
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(90)
            .build_cartesian_2d(lo..hi, (0..entries.len()).into_segmented())?;

        chart
            .configure_mesh()
            .y_labels(entries.len())
            .y_label_formatter(&|y| {
                if let SegmentValue::CenterOf(i) = y {
                    if *i < entries.len() {
                        return entries[*i].0.label().to_string();
                    }
                }
                String::new()
            })
            .x_desc("Score")
            .draw()?;

        chart.draw_series(entries.iter().enumerate().map(|(i, (_, value))| {
            Rectangle::new(
                [
                    (lo, SegmentValue::Exact(i)),
                    (*value, SegmentValue::Exact(i + 1)),
                ],
                orange_shade(i, entries.len()).filled(),
            )
        }))?;

        chart.draw_series(entries.iter().enumerate().map(|(i, (_, value))| {
            Text::new(
                format!("{value:.4}"),
                (*value + 0.0004, SegmentValue::CenterOf(i)),
                ("sans-serif", 13).into_font(),
            )
        }))?;

        Ok(())
    })
}

/// Sequential orange ramp for ranked horizontal bars.
fn orange_shade(rank: usize, total: usize) -> RGBColor {
    let t = if total <= 1 {
        0.5
    } else {
        rank as f64 / (total - 1) as f64
    };
    let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t) as u8;
    RGBColor(lerp(253, 217), lerp(190, 72), lerp(133, 1))
}

/// Percentage improvement of the best model over its runner-up, per metric.
pub fn improvement_chart(
    models: &[ModelMetrics],
    best: &ModelMetrics,
    path: &Path,
) -> Result<PathBuf> {
    with_backend(path, (900, 500), |root| {
        let runner_up = tables::runner_up_by_f1(models, best)
            .context("improvement chart needs at least two models")?;

        let mut entries: Vec<(QualityMetric, f64)> = QualityMetric::ALL
            .iter()
            .map(|&q| {
                (
                    q,
                    tables::percent_diff(best.quality(q), runner_up.quality(q)),
                )
            })
            .collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));

        let hi = entries.first().map(|e| e.1).unwrap_or(1.0) * 1.25;

        let mut chart = ChartBuilder::on(root)
            .caption(
                format!("{} Improvement Over {} (%)", best.name, runner_up.name),
                ("sans-serif", 20),
            )
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(90)
            .build_cartesian_2d(0f64..hi.max(0.1), (0..entries.len()).into_segmented())?;

        chart
            .configure_mesh()
            .y_labels(entries.len())
            .y_label_formatter(&|y| {
                if let SegmentValue::CenterOf(i) = y {
                    if *i < entries.len() {
                        return entries[*i].0.label().to_string();
                    }
                }
                String::new()
            })
            .x_desc("Improvement (%)")
            .draw()?;

        chart.draw_series(entries.iter().enumerate().map(|(i, (_, value))| {
            Rectangle::new(
                [
                    (0.0, SegmentValue::Exact(i)),
                    (value.max(0.0), SegmentValue::Exact(i + 1)),
                ],
                orange_shade(entries.len() - 1 - i, entries.len()).filled(),
            )
        }))?;

        chart.draw_series(entries.iter().enumerate().map(|(i, (_, value))| {
            Text::new(
                format!("+{value:.2}%"),
                (value.max(0.0) + hi * 0.01, SegmentValue::CenterOf(i)),
                ("sans-serif", 13).into_font(),
            )
        }))?;

        Ok(())
    })
}

/// Training-time bars with F1 and accuracy lines on a secondary axis; the
/// best model's bar is highlighted.
pub fn tradeoff_chart(
    models: &[ModelMetrics],
    best: &ModelMetrics,
    path: &Path,
) -> Result<PathBuf> {
    with_backend(path, (900, 550), |root| {
        if models.is_empty() {
            return draw_no_data(root);
        }
        let n = models.len();
        let max_time = models
            .iter()
            .map(|m| m.training_time_min)
            .fold(1.0f64, f64::max);

        let mut chart = ChartBuilder::on(root)
            .caption(
                "Trade-off: Model Performance vs. Training Time",
                ("sans-serif", 18),
            )
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .right_y_label_area_size(60)
            .build_cartesian_2d((0..n).into_segmented(), 0f64..max_time * 1.3)?
            .set_secondary_coord(0f64..n as f64, 0.9f64..1.0f64);

        chart
            .configure_mesh()
            .x_labels(n)
            .x_label_formatter(&|x| segment_label(x, models))
            .y_desc("Training Time (minutes)")
            .draw()?;
        chart
            .configure_secondary_axes()
            .y_desc("Performance Score")
            .draw()?;

        chart.draw_series(models.iter().enumerate().map(|(i, m)| {
            let style = if m.name == best.name {
                TIME_BEST_COLOR.mix(0.9).filled()
            } else {
                TIME_BAR_COLOR.mix(0.6).filled()
            };
            Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::Exact(i + 1), m.training_time_min),
                ],
                style,
            )
        }))?;

        chart
            .draw_secondary_series(LineSeries::new(
                models
                    .iter()
                    .enumerate()
                    .map(|(i, m)| (i as f64 + 0.5, m.f1_score)),
                F1_LINE_COLOR.stroke_width(3),
            ))?
            .label("F1-Score")
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], F1_LINE_COLOR.stroke_width(3))
            });
        chart.draw_secondary_series(models.iter().enumerate().map(|(i, m)| {
            Circle::new((i as f64 + 0.5, m.f1_score), 4, F1_LINE_COLOR.filled())
        }))?;

        chart
            .draw_secondary_series(LineSeries::new(
                models
                    .iter()
                    .enumerate()
                    .map(|(i, m)| (i as f64 + 0.5, m.accuracy)),
                ACC_LINE_COLOR.stroke_width(3),
            ))?
            .label("Accuracy")
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], ACC_LINE_COLOR.stroke_width(3))
            });
        chart.draw_secondary_series(models.iter().enumerate().map(|(i, m)| {
            Circle::new((i as f64 + 0.5, m.accuracy), 4, ACC_LINE_COLOR.filled())
        }))?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .draw()?;
        Ok(())
    })
}

/// Radar spotlight: the best model against the average of the others.
pub fn radar_spotlight_chart(
    models: &[ModelMetrics],
    best: &ModelMetrics,
    path: &Path,
) -> Result<PathBuf> {
    with_backend(path, (700, 700), |root| {
        let others: Vec<&ModelMetrics> =
            models.iter().filter(|m| m.name != best.name).collect();

        let series = vec![
            RadarSeries {
                name: best.name.to_string(),
                values: QualityMetric::ALL.map(|q| best.quality(q)).to_vec(),
                color: BEST_COLOR,
            },
            RadarSeries {
                name: "Avg of Others".to_string(),
                values: QualityMetric::ALL
                    .map(|q| tables::mean_quality(others.iter().copied(), q))
                    .to_vec(),
                color: OTHERS_COLOR,
            },
        ];
        draw_radar(
            root,
            &format!("{} vs. Average of Other Models", best.name),
            &series,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::reference_metrics;

    #[test]
    fn render_all_writes_the_full_report() {
        let dir = tempfile::tempdir().unwrap();
        let models = reference_metrics();

        let written = render_all(&models, dir.path()).unwrap();
        assert_eq!(written.len(), 10);

        for path in &written {
            assert!(path.exists(), "{} missing", path.display());
            assert_eq!(path.extension().unwrap(), "svg");
            assert!(std::fs::metadata(path).unwrap().len() > 0);
        }

        // fixed layout: five top-level charts, five under gin_analysis
        let in_analysis = written
            .iter()
            .filter(|p| p.parent().unwrap().ends_with("gin_analysis"))
            .count();
        assert_eq!(in_analysis, 5);
        assert!(dir.path().join("1_training_time.svg").exists());
        assert!(dir
            .path()
            .join("gin_analysis/gin_radar_spotlight.svg")
            .exists());
    }

    #[test]
    fn png_paths_become_svg() {
        assert_eq!(
            svg_path(Path::new("out/1_training_time.png")),
            PathBuf::from("out/1_training_time.svg")
        );
        assert_eq!(
            svg_path(Path::new("out/chart.svg")),
            PathBuf::from("out/chart.svg")
        );
    }

    #[test]
    fn empty_table_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        assert!(render_all(&[], dir.path()).is_err());
    }

    #[test]
    fn orange_ramp_endpoints() {
        assert_eq!(orange_shade(0, 5), RGBColor(253, 190, 133));
        assert_eq!(orange_shade(4, 5), RGBColor(217, 72, 1));
    }
}

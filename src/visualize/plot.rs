extern crate plotters;

use plotters::prelude::*;
use plotters::style::{FontDesc,FontFamily,FontStyle};

use crate::{Float,retention};

// 12x7 inch canvas at 300 dpi
const CANVAS_WIDTH: u32 = 3600;
const CANVAS_HEIGHT: u32 = 2100;

const DRIFT_COLOR: RGBColor = RGBColor(231,76,60);
const STABLE_COLOR: RGBColor = RGBColor(39,174,96);
const CRASH_COLOR: RGBColor = RGBColor(243,156,18);
const ANNOTATION_COLOR: RGBColor = RGBColor(51,51,51);
const THRESHOLD_COLOR: RGBColor = RGBColor(128,128,128);

pub fn draw_retention_benchmark(stochastic: &Vec<Float>, deterministic: &Vec<Float>, crash_steps: &Vec<usize>, output_folder: &str, file_name: &str) -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(stochastic.len(),deterministic.len());

    let path = format!("{}/{}",output_folder,file_name);
    let root = BitMapBackend::new(&path, (CANVAS_WIDTH, CANVAS_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let last_step = stochastic.len() - 1;

    let mut chart = ChartBuilder::on(&root)
        .margin(40)
        .set_label_area_size(LabelAreaPosition::Left, 140)
        .set_label_area_size(LabelAreaPosition::Bottom, 120)
        .caption("Stochastic Drift vs. Deterministic State (50-Step Task)", ("sans-serif", 64))
        .build_cartesian_2d(0..last_step, 0.0..105.0)?;

    chart
        .configure_mesh()
        .x_desc("Execution Step (Task Depth)")
        .y_desc("Effective Context Retention (%)")
        .axis_desc_style(("sans-serif", 36))
        .label_style(("sans-serif", 30))
        .draw()?;

    chart.draw_series(
        AreaSeries::new(
            (0..).zip(stochastic.iter()).map(|(x, y)| (x, *y)),
            0.0,
            DRIFT_COLOR.mix(0.1),
        )
    )?;

    chart.draw_series(
        DashedLineSeries::new(
            (0..).zip(stochastic.iter()).map(|(x, y)| (x, *y)),
            14,
            10,
            DRIFT_COLOR.stroke_width(4),
        )
    )?.label("Standard Agent (Context Decay)").legend(|(x, y)| PathElement::new(vec![(x, y), (x + 40, y)], &DRIFT_COLOR));

    chart.draw_series(
        LineSeries::new(
            (0..).zip(deterministic.iter()).map(|(x, y)| (x, *y)),
            STABLE_COLOR.stroke_width(7),
        )
    )?.label("Seu-Claude v2 (Persistent DAG)").legend(|(x, y)| PathElement::new(vec![(x, y), (x + 40, y)], &STABLE_COLOR));

    chart.draw_series(
        crash_steps.iter().map(|&step| Cross::new((step, retention::RETENTION_FULL), 18, CRASH_COLOR.stroke_width(6)))
    )?;

    // callout on the first crash only
    let annotated_step = crash_steps[0];
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(annotated_step + 2, 86.0), (annotated_step, 99.0)],
        ANNOTATION_COLOR.stroke_width(3),
    )))?;
    chart.draw_series(std::iter::once(Text::new(
        "Crash & Recover (No State Loss)",
        (annotated_step + 2, 85.0),
        ("sans-serif", 32).into_font().color(&ANNOTATION_COLOR),
    )))?;

    chart.draw_series(
        DashedLineSeries::new(
            vec![(0, retention::HALLUCINATION_THRESHOLD), (last_step, retention::HALLUCINATION_THRESHOLD)],
            6,
            12,
            THRESHOLD_COLOR.mix(0.5).stroke_width(3),
        )
    )?;
    chart.draw_series(std::iter::once(Text::new(
        "Hallucination Threshold (Unreliable Zone)",
        (1, 62.0),
        FontDesc::new(FontFamily::SansSerif, 30.0, FontStyle::Italic).color(&THRESHOLD_COLOR),
    )))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerLeft)
        .background_style(WHITE.mix(0.8))
        .label_font(("sans-serif", 34))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

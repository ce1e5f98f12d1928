//! 在终端中以字符绘制随机欧氏图的最小生成树
//!
//! 用法: render_text [顶点数] [种子]

use primmst::config::{GraphOptions, PlotConfig, MAX_VERTICES};
use primmst::pipeline;
use primmst::raster::CellKind;

fn glyph(kind: CellKind) -> char {
    match kind {
        CellKind::Background => ' ',
        CellKind::Edge => '.',
        CellKind::Vertex => 'o',
        CellKind::StartVertex => '@',
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mut options = GraphOptions::default();
    if let Some(vertices) = args.next() {
        match vertices.parse() {
            Ok(v) => options.vertices = v,
            Err(err) => {
                eprintln!("invalid vertex count {vertices:?}: {err}");
                std::process::exit(2);
            }
        }
    }
    if let Some(seed) = args.next() {
        match seed.parse() {
            Ok(s) => options.seed = s,
            Err(err) => {
                eprintln!("invalid seed {seed:?}: {err}");
                std::process::exit(2);
            }
        }
    }

    // 终端字符约为 1:2，行数取列数的一半
    let config = PlotConfig {
        rows: 40,
        columns: 80,
        xlabels: 5,
        ylabels: 5,
    };

    let plot = match pipeline::run(&options, &config, MAX_VERTICES) {
        Ok(plot) => plot,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    for row in 0..plot.grid.rows() {
        let line: String = plot
            .grid
            .row(row)
            .unwrap_or_default()
            .iter()
            .map(|&cell| glyph(cell))
            .collect();
        println!("|{line}|");
    }
    println!("x: {}", plot.x_labels.join("  "));
    println!("y: {}", plot.y_labels.join("  "));
    println!(
        "vertices: {}  start: {}  MST distance: {}",
        plot.vertex_count, plot.start_location, plot.distance_text
    );
    println!("{}", plot.status_text);
}

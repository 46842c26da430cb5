//! End-to-end pipeline checks over synthetic result directories.

use manetperf::table::Algorithm;
use manetperf::{chart, collect_records};
use std::fs;
use tempfile::TempDir;

fn result_file(
    nodes: &str,
    mobility: &str,
    speed: &str,
    algo: &str,
    loss: f64,
    delay: f64,
    overhead: f64,
) -> (String, String) {
    let name = format!("{nodes}nodes_{mobility}_{speed}mps_{algo}.txt");
    let body = format!(
        "FlowMonitor statistics\n\
         PacketLossRatio: {loss}%\n\
         AvgDelay: {delay} ms\n\
         ControlOverhead: {overhead}%\n"
    );
    (name, body)
}

#[test]
fn round_trip_single_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("50nodes_RandomWaypoint_10mps_AODV.txt"),
        "... PacketLossRatio: 5.0% ... AvgDelay: 120.0 ms ... ControlOverhead: 3.2% ...",
    )
    .unwrap();

    let table = collect_records(dir.path()).unwrap();
    assert_eq!(table.len(), 1);

    let record = &table.records()[0];
    assert_eq!(record.algorithm, Algorithm::Aodv);
    assert_eq!(record.mobility, "RandomWaypoint");
    assert_eq!(record.node_count, "50");
    assert_eq!(record.speed, "10");
    assert_eq!(record.packet_loss, 5.0);
    assert_eq!(record.avg_delay, 120.0);
    assert_eq!(record.control_overhead, 3.2);
}

#[test]
fn repeated_blocks_share_the_categorical_fields() {
    let dir = TempDir::new().unwrap();
    let block = "PacketLossRatio: 4.0%\nAvgDelay: 100.0 ms\nControlOverhead: 2.0%\n";
    let other = "PacketLossRatio: 6.0%\nAvgDelay: 140.0 ms\nControlOverhead: 4.0%\n";
    fs::write(
        dir.path().join("25nodes_RandomWalk_5mps_OLSR.txt"),
        format!("{block}--- trial 2 ---\n{other}"),
    )
    .unwrap();

    let table = collect_records(dir.path()).unwrap();
    assert_eq!(table.len(), 2);
    let records = table.records();
    assert_eq!(records[0].algorithm, Algorithm::Olsr);
    assert_eq!(records[0].mobility, records[1].mobility);
    assert_eq!(records[0].node_count, records[1].node_count);
    assert_eq!(records[0].speed, records[1].speed);
    assert_eq!(records[0].packet_loss, 4.0);
    assert_eq!(records[1].packet_loss, 6.0);
}

#[test]
fn file_without_metrics_contributes_nothing() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("25nodes_RandomWalk_5mps_DSDV.txt"),
        "simulation aborted before FlowMonitor output\n",
    )
    .unwrap();

    let table = collect_records(dir.path()).unwrap();
    assert!(table.is_empty());
}

#[test]
fn malformed_filename_fails_the_run() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("50nodes_RandomWaypoint_AODV.txt"), "x").unwrap();
    assert!(collect_records(dir.path()).is_err());
}

#[test]
fn full_run_produces_thirty_charts() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let mut seed = 0.0;
    for algo in ["AODV", "OLSR", "DSDV"] {
        for nodes in ["25", "50"] {
            for mobility in ["RandomWalk", "RandomWaypoint"] {
                for speed in ["5", "10"] {
                    seed += 0.1;
                    let (name, body) = result_file(
                        nodes,
                        mobility,
                        speed,
                        algo,
                        4.0 + seed,
                        100.0 + 10.0 * seed,
                        2.0 + seed,
                    );
                    fs::write(dir.path().join(name), body).unwrap();
                }
            }
        }
    }

    let table = collect_records(dir.path()).unwrap();
    assert_eq!(table.len(), 24);

    let generated = chart::render_all(&table, out.path(), 0.90).unwrap();
    assert_eq!(generated.len(), 30);
    for path in &generated {
        assert!(path.exists(), "missing chart {}", path.display());
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));
    }

    // spot-check the naming scheme for both chart families
    assert!(out
        .path()
        .join("AODV_quantidade_nos_perda_pacotes.png")
        .exists());
    assert!(out.path().join("DSDV_mobilidade_delay_medio.png").exists());
    assert!(out.path().join("comparacao_global_control_overhead.png").exists());
}

#[test]
fn aggregation_group_of_one_fails_the_run() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    // a single AODV trial: every AODV group has n=1
    let (name, body) = result_file("50", "RandomWaypoint", "10", "AODV", 5.0, 120.0, 3.2);
    fs::write(dir.path().join(name), body).unwrap();

    let table = collect_records(dir.path()).unwrap();
    assert!(chart::render_all(&table, out.path(), 0.90).is_err());
}

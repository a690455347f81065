use jiggle_limits::{BoneByName, LimitsAsset, SkeletonBones};
use serde_json::json;
use std::path::PathBuf;

fn load(path: &PathBuf, bones: Option<&SkeletonBones>) -> LimitsAsset {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("limits")
        .to_string();
    let json = std::fs::read_to_string(path).expect("read json");
    match bones {
        Some(bones) => LimitsAsset::from_json_str(name, &json, bones).expect("parse json"),
        None => LimitsAsset::from_json_str(name, &json, &BoneByName).expect("parse json"),
    }
}

fn main() {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let mut positional = Vec::<String>::new();
    let mut bones: Option<SkeletonBones> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--bones" => {
                bones = args
                    .get(i + 1)
                    .map(|list| SkeletonBones::new(list.split(',').map(str::trim)));
                i += 2;
            }
            other => {
                positional.push(other.to_string());
                i += 1;
            }
        }
    }

    let Some(path) = positional.first().map(PathBuf::from) else {
        eprintln!("usage: limits_dump <limits.json> [--bones root,spine,head]");
        std::process::exit(2);
    };

    let asset = load(&path, bones.as_ref());

    let out = json!({
        "name": asset.name,
        "version": asset.version().get(),
        "sphericalLimits": asset.spherical_limits(),
        "capsuleLimits": asset.capsule_limits(),
        "boxLimits": asset.box_limits(),
        "planarLimits": asset.planar_limits(),
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&out).expect("serialize limits")
    );
}

// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Sparse per-body position history
//!
//! The sampler owns every body's history, keyed by [`BodyId`], so bodies
//! only ever carry their current state.

use super::cadence::Cadence;
use crate::bodies::{Body, BodyId, BodySet, Vector2};

/// Sampled positions of one body
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    id: BodyId,
    name: String,
    color: String,
    samples: Vec<Vector2>,
}

impl Track {
    /// Id of the sampled body
    pub fn id(&self) -> BodyId {
        self.id
    }

    /// Name of the sampled body
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display tag of the sampled body
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Positions in sampling order, in meters
    pub fn samples(&self) -> &[Vector2] {
        &self.samples
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether nothing has been sampled yet
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// One row of the tabular transport format: `name,color,x,y`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryRow<'a> {
    /// Body name
    pub name: &'a str,
    /// Body display tag
    pub color: &'a str,
    /// X position in meters
    pub x: f64,
    /// Y position in meters
    pub y: f64,
}

/// Sampled history of every body in a run, in body-set order
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    tracks: Vec<Track>,
    sample_interval: u64,
}

impl Trajectory {
    /// Tracks in body-set order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Track of the body with the given id
    pub fn get(&self, id: BodyId) -> Option<&Track> {
        self.tracks.get(id.index())
    }

    /// Track of the body with the given name
    pub fn find(&self, name: &str) -> Option<&Track> {
        self.tracks.iter().find(|track| track.name == name)
    }

    /// Steps between consecutive samples
    pub fn sample_interval(&self) -> u64 {
        self.sample_interval
    }

    /// Rows ordered by body, then by sample index
    pub fn rows(&self) -> impl Iterator<Item = TrajectoryRow<'_>> + '_ {
        self.tracks.iter().flat_map(|track| {
            track.samples.iter().map(move |sample| TrajectoryRow {
                name: &track.name,
                color: &track.color,
                x: sample.x,
                y: sample.y,
            })
        })
    }
}

/// Records body positions on a fixed step cadence
#[derive(Debug, Clone)]
pub struct TrajectorySampler {
    cadence: Cadence,
    trajectory: Trajectory,
}

impl TrajectorySampler {
    /// Create a sampler for `bodies` over a run of `steps` steps
    ///
    /// About `sample_target` samples are recorded per body; see [`Cadence`]
    /// for the exact count.
    pub fn new(bodies: &BodySet, steps: u64, sample_target: u64) -> Self {
        let cadence = Cadence::new(steps, sample_target);
        let capacity = usize::try_from(cadence.count(steps)).unwrap_or(0);
        let tracks = bodies
            .iter()
            .map(|body| Track {
                id: body.id(),
                name: body.name().to_string(),
                color: body.color().to_string(),
                samples: Vec::with_capacity(capacity),
            })
            .collect();

        TrajectorySampler {
            cadence,
            trajectory: Trajectory {
                tracks,
                sample_interval: cadence.interval(),
            },
        }
    }

    /// Cadence this sampler records on
    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    /// Append `body`'s position if `step_index` is on the sampling cadence
    ///
    /// Returns whether a sample was recorded. Bodies unknown to this sampler
    /// are ignored.
    pub fn maybe_sample(&mut self, step_index: u64, body: &Body) -> bool {
        if !self.cadence.is_due(step_index) {
            return false;
        }
        match self.trajectory.tracks.get_mut(body.id().index()) {
            Some(track) => {
                track.samples.push(body.position);
                true
            }
            None => false,
        }
    }

    /// Sample every body in `bodies` at `step_index`
    pub fn record(&mut self, step_index: u64, bodies: &BodySet) -> bool {
        if !self.cadence.is_due(step_index) {
            return false;
        }
        for body in bodies {
            self.maybe_sample(step_index, body);
        }
        true
    }

    /// Trajectory recorded so far
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Consume the sampler and return the recorded trajectory
    pub fn finish(self) -> Trajectory {
        self.trajectory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::InitialCondition;

    fn bodies() -> BodySet {
        BodySet::new(vec![
            InitialCondition::new("Sun", 1.0e30, Vector2::zero(), Vector2::zero())
                .with_color("yellow"),
            InitialCondition::new("Earth", 6.0e24, Vector2::new(1.0, 2.0), Vector2::zero())
                .with_color("blue"),
        ])
        .unwrap()
    }

    #[test]
    fn test_samples_on_cadence_only() {
        let set = bodies();
        let mut sampler = TrajectorySampler::new(&set, 100, 10);
        assert_eq!(sampler.cadence().interval(), 10);

        let earth = set.find("Earth").unwrap();
        assert!(sampler.maybe_sample(0, earth));
        assert!(!sampler.maybe_sample(5, earth));
        assert!(sampler.maybe_sample(10, earth));

        let trajectory = sampler.finish();
        assert_eq!(trajectory.find("Earth").unwrap().len(), 2);
        assert!(trajectory.find("Sun").unwrap().is_empty());
        assert_eq!(trajectory.sample_interval(), 10);
    }

    #[test]
    fn test_record_all_bodies() {
        let set = bodies();
        let mut sampler = TrajectorySampler::new(&set, 30, 1000);
        for step in 0..30 {
            assert!(sampler.record(step, &set));
        }
        let trajectory = sampler.finish();
        for track in trajectory.tracks() {
            assert_eq!(track.len(), 30);
        }
        let earth = set.find("Earth").unwrap();
        assert_eq!(trajectory.get(earth.id()).unwrap().samples()[0], Vector2::new(1.0, 2.0));
    }

    #[test]
    fn test_rows_ordered_by_body_then_sample() {
        let set = bodies();
        let mut sampler = TrajectorySampler::new(&set, 2, 2);
        sampler.record(0, &set);
        sampler.record(1, &set);

        let rows: Vec<_> = sampler.trajectory().rows().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].name, "Sun");
        assert_eq!(rows[0].color, "yellow");
        assert_eq!(rows[1].name, "Sun");
        assert_eq!(rows[2].name, "Earth");
        assert_eq!((rows[3].x, rows[3].y), (1.0, 2.0));
    }
}

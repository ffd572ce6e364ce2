//! Batch province assignment for incident records.

use tracing::{debug, info, warn};

use crate::models::{AnnotatedIncident, Incident, Unresolved, UNKNOWN_REGION};
use crate::pip::RegionResolver;

/// Result of annotating one batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotation {
    /// One record per input incident, in input order
    pub incidents: Vec<AnnotatedIncident>,
    pub unresolved: Vec<Unresolved>,
}

/// Assign a province to every incident.
///
/// Input records are not modified. Incidents that no region contains get
/// `"Unknown"` and are also listed in [`Annotation::unresolved`].
pub fn annotate(incidents: &[Incident], resolver: &RegionResolver) -> Annotation {
    let mut annotation = Annotation::default();

    for incident in incidents {
        // Records are [lat, lon]; the resolver wants x = lon, y = lat
        let point = incident.coords.to_point();
        let province = resolver.resolve(point);

        debug!("Incident {} at {} -> {}", incident.id, incident.coords, province);

        if province == UNKNOWN_REGION {
            warn!("No province contains incident {} at {}", incident.id, incident.coords);
            annotation.unresolved.push(Unresolved {
                id: incident.id.clone(),
                coords: incident.coords.clone(),
            });
        }

        annotation.incidents.push(incident.annotated(province));
    }

    info!(
        "Annotated {} incidents ({} unresolved)",
        annotation.incidents.len(),
        annotation.unresolved.len()
    );

    annotation
}

//! Routing many requests over one network.

use sn_core::NodeId;
use sn_spatial::{RoadNetwork, Route, Router, SpatialResult};

/// Route every `(from, to)` request; results keep the request order.
///
/// With the `parallel` feature the requests are spread over the Rayon thread
/// pool.  Each search holds only local state, so results are identical to the
/// sequential run.
pub fn route_batch<R: Router>(
    network:  &RoadNetwork,
    router:   &R,
    requests: &[(NodeId, NodeId)],
) -> Vec<SpatialResult<Route>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        requests
            .par_iter()
            .map(|&(from, to)| router.route(network, from, to))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        requests
            .iter()
            .map(|&(from, to)| router.route(network, from, to))
            .collect()
    }
}

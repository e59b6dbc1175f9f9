use super::{client::AcquisitionsClient, models::*};
use crate::error::FleetError;
use log::info;

impl AcquisitionsClient {
    /// `GET {base_url}/aquisicoes`, decoded as a JSON array of rows in server order
    pub async fn fetch_acquisitions(&self) -> Result<AcquisitionList, FleetError> {
        let response = self.call(self.endpoint().clone()).await?;
        let body = response.text().await?;
        let items: Vec<Acquisition> = serde_json::from_str(&body)?;

        info!("Fetched {} acquisitions", items.len());
        Ok(AcquisitionList::new(items))
    }
}

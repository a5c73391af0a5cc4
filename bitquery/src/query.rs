use serde::Serialize;
use serde_json::Value;

/// Selection for every argument value shape Bitquery can return.
const ARGUMENT_SELECTION: &str = "Arguments {
        Name
        Type
        Value {
          ... on EVM_ABI_Integer_Value_Arg {
            integer
          }
          ... on EVM_ABI_String_Value_Arg {
            string
          }
          ... on EVM_ABI_Address_Value_Arg {
            address
          }
          ... on EVM_ABI_BigInt_Value_Arg {
            bigInteger
          }
          ... on EVM_ABI_Bytes_Value_Arg {
            hex
          }
          ... on EVM_ABI_Boolean_Value_Arg {
            bool
          }
        }
      }";

/// Body of a GraphQL POST.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
    pub variables: Value,
}

impl GraphQlRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: Value::Object(Default::default()),
        }
    }
}

/// Newest-first query over `EVM.Events` for one contract and one event name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsQuery {
    pub network: String,
    pub smart_contract: String,
    pub signature: String,
    /// Keep only events whose argument list starts with this address.
    pub first_argument: Option<String>,
    pub limit: u32,
}

impl EventsQuery {
    pub fn new(
        network: impl Into<String>,
        smart_contract: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            network: network.into(),
            smart_contract: smart_contract.into(),
            signature: signature.into(),
            first_argument: None,
            limit: 1,
        }
    }

    pub fn starting_with_address(mut self, address: impl Into<String>) -> Self {
        self.first_argument = Some(address.into());
        self
    }

    pub fn limit(mut self, count: u32) -> Self {
        self.limit = count;
        self
    }

    fn where_clause(&self) -> String {
        let log = format!(
            "Log: {{Signature: {{Name: {{is: \"{}\"}}}}, SmartContract: {{is: \"{}\"}}}}",
            self.signature, self.smart_contract
        );
        match &self.first_argument {
            Some(addr) => format!(
                "{{{log}, Arguments: {{startsWith: {{Value: {{Address: {{is: \"{addr}\"}}}}}}}}}}"
            ),
            None => format!("{{{log}}}"),
        }
    }

    /// Render the GraphQL document.
    pub fn to_graphql(&self) -> String {
        format!(
            "query {{
  EVM(network: {network}) {{
    Events(
      limit: {{count: {limit}}}
      orderBy: {{descending: Block_Time}}
      where: {filter}
    ) {{
      Transaction {{
        Hash
      }}
      Block {{
        Time
      }}
      Log {{
        Signature {{
          Name
        }}
      }}
      {arguments}
    }}
  }}
}}
",
            network = self.network,
            limit = self.limit,
            filter = self.where_clause(),
            arguments = ARGUMENT_SELECTION,
        )
    }

    pub fn to_request(&self) -> GraphQlRequest {
        GraphQlRequest::new(self.to_graphql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FACTORY: &str = "0x1F98431c8aD98523631AE4a59f267346ea31F984";
    const WETH: &str = "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1";

    #[test]
    fn pool_created_document_carries_every_filter() {
        let doc = EventsQuery::new("arbitrum", FACTORY, "PoolCreated")
            .starting_with_address(WETH)
            .to_graphql();

        assert!(doc.contains("EVM(network: arbitrum)"));
        assert!(doc.contains("limit: {count: 1}"));
        assert!(doc.contains("orderBy: {descending: Block_Time}"));
        assert!(doc.contains(
            "Log: {Signature: {Name: {is: \"PoolCreated\"}}, SmartContract: {is: \"0x1F98431c8aD98523631AE4a59f267346ea31F984\"}}"
        ));
        assert!(doc.contains(
            "Arguments: {startsWith: {Value: {Address: {is: \"0x82aF49447D8a07e3bd95BD0d56f35241523fBab1\"}}}}"
        ));
        assert!(doc.contains("... on EVM_ABI_Address_Value_Arg"));
    }

    #[test]
    fn braces_balance() {
        let doc = EventsQuery::new("eth", FACTORY, "PairCreated")
            .limit(5)
            .to_graphql();
        let open = doc.matches('{').count();
        let close = doc.matches('}').count();
        assert_eq!(open, close);
        assert!(doc.contains("limit: {count: 5}"));
        assert!(!doc.contains("startsWith"));
    }

    #[test]
    fn request_sends_empty_variables_object() {
        let req = EventsQuery::new("arbitrum", FACTORY, "PoolCreated").to_request();
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["variables"], serde_json::json!({}));
        assert!(body["query"].as_str().unwrap().starts_with("query {"));
    }
}

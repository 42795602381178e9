//! BitBadges tool routes.
//!
//! Generated by `bitbadges-mcp generate` from the BitBadges OpenAPI document.
//! Do not edit by hand; regenerate instead.

use openapi_parser::HttpMethod;
use serde_json::{Map, Value};

use crate::error::GatewayError;
use crate::tools::{path_arg, Route};

/// Serialized tool catalog, configure tool first
pub const CATALOG_JSON: &str = r#"[
  {
    "name": "bitbadges_configure",
    "description": "Configure the BitBadges API key and base URL",
    "inputSchema": {
      "type": "object",
      "properties": {
        "apiKey": {
          "type": "string",
          "description": "Your BitBadges API key from the developer portal"
        },
        "baseUrl": {
          "type": "string",
          "description": "Base URL for the BitBadges API (optional, defaults to https://api.bitbadges.io)"
        }
      },
      "required": [
        "apiKey"
      ]
    }
  },
  {
    "name": "bitbadges_getAccount",
    "description": "Get Account",
    "inputSchema": {
      "type": "object",
      "properties": {
        "address": {
          "type": "string",
          "description": "address parameter"
        },
        "username": {
          "type": "string",
          "description": "username parameter"
        }
      },
      "required": []
    },
    "metadata": {
      "path": "/user",
      "method": "GET",
      "operationId": "getAccount",
      "tags": [
        "Accounts"
      ],
      "queryParams": [
        "address",
        "username"
      ]
    }
  },
  {
    "name": "bitbadges_getAccounts",
    "description": "Get Accounts - Batch",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iGetAccountsPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/users",
      "method": "POST",
      "operationId": "getAccounts",
      "tags": [
        "Accounts"
      ]
    }
  },
  {
    "name": "bitbadges_getCollection",
    "description": "Get Collection",
    "inputSchema": {
      "type": "object",
      "properties": {
        "collectionId": {
          "type": "string",
          "description": "Collection ID"
        }
      },
      "required": [
        "collectionId"
      ]
    },
    "metadata": {
      "path": "/collection/{collectionId}",
      "method": "GET",
      "operationId": "getCollection",
      "tags": [
        "Badges"
      ]
    }
  },
  {
    "name": "bitbadges_getBadgeMetadata",
    "description": "Get Badge Metadata",
    "inputSchema": {
      "type": "object",
      "properties": {
        "collectionId": {
          "type": "string",
          "description": "Collection ID"
        },
        "badgeId": {
          "type": "string",
          "description": "Badge ID"
        }
      },
      "required": [
        "collectionId",
        "badgeId"
      ]
    },
    "metadata": {
      "path": "/collection/{collectionId}/{badgeId}/metadata",
      "method": "GET",
      "operationId": "getBadgeMetadata",
      "tags": [
        "Badges"
      ]
    }
  },
  {
    "name": "bitbadges_getCollectionsBatch",
    "description": "Get Collections - Batch",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iGetCollectionsPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/collections",
      "method": "POST",
      "operationId": "getCollectionsBatch",
      "tags": [
        "Badges"
      ]
    }
  },
  {
    "name": "bitbadges_getBadgeBalanceByAddressSpecificBadge",
    "description": "Get Badge Balance By Address - Specific Badge",
    "inputSchema": {
      "type": "object",
      "properties": {
        "collectionId": {
          "type": "integer",
          "description": "The ID of the collection containing the badge."
        },
        "address": {
          "type": "string",
          "description": "The address for which the badge balance is to be retrieved. Can be \"Total\" for the circulating supply."
        },
        "badgeId": {
          "type": "integer",
          "description": "The ID of the badge for which the balance is to be retrieved."
        }
      },
      "required": [
        "collectionId",
        "address",
        "badgeId"
      ]
    },
    "metadata": {
      "path": "/collection/{collectionId}/balance/{address}/{badgeId}",
      "method": "GET",
      "operationId": "getBadgeBalanceByAddressSpecificBadge",
      "tags": [
        "Badges"
      ]
    }
  },
  {
    "name": "bitbadges_getBadgeBalanceByAddress",
    "description": "Get Badge Balances By Address",
    "inputSchema": {
      "type": "object",
      "properties": {
        "collectionId": {
          "type": "integer",
          "description": "The ID of the collection containing the badge."
        },
        "address": {
          "type": "string",
          "description": "The address for which the badge balance is to be retrieved. Can be \"Total\" for the circulating supply."
        },
        "fetchPrivateParams": {
          "type": "boolean",
          "description": "fetchPrivateParams parameter"
        },
        "forceful": {
          "type": "boolean",
          "description": "forceful parameter"
        }
      },
      "required": [
        "collectionId",
        "address"
      ]
    },
    "metadata": {
      "path": "/collection/{collectionId}/balance/{address}",
      "method": "GET",
      "operationId": "getBadgeBalanceByAddress",
      "tags": [
        "Badges"
      ],
      "queryParams": [
        "fetchPrivateParams",
        "forceful"
      ]
    }
  },
  {
    "name": "bitbadges_getClaim",
    "description": "Get Claim",
    "inputSchema": {
      "type": "object",
      "properties": {
        "claimId": {
          "type": "string",
          "description": "Claim ID"
        },
        "fetchPrivateParams": {
          "type": "boolean",
          "description": "fetchPrivateParams parameter"
        },
        "fetchAllClaimedUsers": {
          "type": "boolean",
          "description": "fetchAllClaimedUsers parameter"
        },
        "privateStatesToFetch": {
          "type": "array",
          "description": "privateStatesToFetch parameter"
        }
      },
      "required": [
        "claimId"
      ]
    },
    "metadata": {
      "path": "/claim/{claimId}",
      "method": "GET",
      "operationId": "getClaim",
      "tags": [
        "Claims"
      ],
      "queryParams": [
        "fetchPrivateParams",
        "fetchAllClaimedUsers",
        "privateStatesToFetch"
      ]
    }
  },
  {
    "name": "bitbadges_checkClaimSuccess",
    "description": "Check Claim Successes By User",
    "inputSchema": {
      "type": "object",
      "properties": {
        "claimId": {
          "type": "string",
          "description": "claimId parameter"
        },
        "address": {
          "type": "string",
          "description": "address parameter"
        }
      },
      "required": [
        "claimId",
        "address"
      ]
    },
    "metadata": {
      "path": "/claims/success/{claimId}/{address}",
      "method": "GET",
      "operationId": "checkClaimSuccess",
      "tags": [
        "Claims"
      ]
    }
  },
  {
    "name": "bitbadges_getAttestation",
    "description": "Get Attestation",
    "inputSchema": {
      "type": "object",
      "properties": {
        "attestationId": {
          "type": "string",
          "description": "Attestation ID"
        }
      },
      "required": [
        "attestationId"
      ]
    },
    "metadata": {
      "path": "/attestation/{attestationId}",
      "method": "GET",
      "operationId": "getAttestation",
      "tags": [
        "Attestations"
      ]
    }
  },
  {
    "name": "bitbadges_getDeveloperApp",
    "description": "Get OAuth App",
    "inputSchema": {
      "type": "object",
      "properties": {
        "clientId": {
          "type": "string",
          "description": "Client ID"
        }
      },
      "required": [
        "clientId"
      ]
    },
    "metadata": {
      "path": "/developerApp/{clientId}",
      "method": "GET",
      "operationId": "getDeveloperApp",
      "tags": [
        "Sign In with BitBadges"
      ]
    }
  },
  {
    "name": "bitbadges_createDeveloperApp",
    "description": "Create OAuth App",
    "inputSchema": {
      "type": "object",
      "properties": {},
      "required": []
    },
    "metadata": {
      "path": "/developerApps",
      "method": "POST",
      "operationId": "createDeveloperApp",
      "tags": [
        "Sign In with BitBadges"
      ]
    }
  },
  {
    "name": "bitbadges_updateDeveloperApp",
    "description": "Update OAuth App",
    "inputSchema": {
      "type": "object",
      "properties": {
        "clientId": {
          "type": "string",
          "description": "Client ID"
        }
      },
      "required": [
        "clientId"
      ]
    },
    "metadata": {
      "path": "/developerApps",
      "method": "PUT",
      "operationId": "updateDeveloperApp",
      "tags": [
        "Sign In with BitBadges"
      ],
      "queryParams": [
        "clientId"
      ]
    }
  },
  {
    "name": "bitbadges_deleteDeveloperApp",
    "description": "Delete OAuth App",
    "inputSchema": {
      "type": "object",
      "properties": {
        "clientId": {
          "type": "string",
          "description": "Client ID"
        }
      },
      "required": [
        "clientId"
      ]
    },
    "metadata": {
      "path": "/developerApps",
      "method": "DELETE",
      "operationId": "deleteDeveloperApp",
      "tags": [
        "Sign In with BitBadges"
      ],
      "queryParams": [
        "clientId"
      ]
    }
  },
  {
    "name": "bitbadges_getPlugin",
    "description": "Get Plugin",
    "inputSchema": {
      "type": "object",
      "properties": {
        "pluginId": {
          "type": "string",
          "description": "Plugin ID"
        }
      },
      "required": [
        "pluginId"
      ]
    },
    "metadata": {
      "path": "/plugin/{pluginId}",
      "method": "GET",
      "operationId": "getPlugin",
      "tags": [
        "Plugins"
      ]
    }
  },
  {
    "name": "bitbadges_getUtilityListing",
    "description": "Get Utility Listing",
    "inputSchema": {
      "type": "object",
      "properties": {
        "utilityListingId": {
          "type": "string",
          "description": "Utility listing ID"
        }
      },
      "required": [
        "utilityListingId"
      ]
    },
    "metadata": {
      "path": "/utilityListing/{utilityListingId}",
      "method": "GET",
      "operationId": "getUtilityListing",
      "tags": [
        "Utility Listings"
      ]
    }
  },
  {
    "name": "bitbadges_getDynamicDataStore",
    "description": "Get Dynamic Data Store",
    "inputSchema": {
      "type": "object",
      "properties": {
        "dynamicStoreId": {
          "type": "string",
          "description": "Dynamic data store ID"
        },
        "dataSecret": {
          "type": "string",
          "description": "dataSecret parameter"
        }
      },
      "required": [
        "dynamicStoreId"
      ]
    },
    "metadata": {
      "path": "/dynamicStore/{dynamicStoreId}",
      "method": "GET",
      "operationId": "getDynamicDataStore",
      "tags": [
        "Dynamic Stores"
      ],
      "queryParams": [
        "dataSecret"
      ]
    }
  },
  {
    "name": "bitbadges_getDynamicDataStoreValue",
    "description": "Get Dynamic Data Store Value",
    "inputSchema": {
      "type": "object",
      "properties": {
        "dynamicStoreId": {
          "type": "string",
          "description": "Dynamic data store ID"
        },
        "key": {
          "type": "string",
          "description": "key parameter"
        },
        "dataSecret": {
          "type": "string",
          "description": "dataSecret parameter"
        },
        "lookupType": {
          "type": "string",
          "description": "lookupType parameter"
        }
      },
      "required": [
        "dynamicStoreId",
        "key"
      ]
    },
    "metadata": {
      "path": "/dynamicStore/{dynamicStoreId}/value",
      "method": "GET",
      "operationId": "getDynamicDataStoreValue",
      "tags": [
        "Dynamic Stores"
      ],
      "queryParams": [
        "key",
        "dataSecret",
        "lookupType"
      ]
    }
  },
  {
    "name": "bitbadges_getDynamicDataStoreValuesPaginated",
    "description": "Get Dynamic Data Store Values Paginated",
    "inputSchema": {
      "type": "object",
      "properties": {
        "dynamicStoreId": {
          "type": "string",
          "description": "Dynamic data store ID"
        },
        "dataSecret": {
          "type": "string",
          "description": "dataSecret parameter"
        },
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        },
        "lookupType": {
          "type": "string",
          "description": "lookupType parameter"
        }
      },
      "required": [
        "dynamicStoreId"
      ]
    },
    "metadata": {
      "path": "/dynamicStore/{dynamicStoreId}/values",
      "method": "GET",
      "operationId": "getDynamicDataStoreValuesPaginated",
      "tags": [
        "Dynamic Stores"
      ],
      "queryParams": [
        "dataSecret",
        "bookmark",
        "lookupType"
      ]
    }
  },
  {
    "name": "bitbadges_createDynamicDataStore",
    "description": "Create Dynamic Data Store",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iCreateDynamicDataStorePayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/dynamicStores",
      "method": "POST",
      "operationId": "createDynamicDataStore",
      "tags": [
        "Dynamic Stores"
      ]
    }
  },
  {
    "name": "bitbadges_updateDynamicDataStore",
    "description": "Update Dynamic Data Store",
    "inputSchema": {
      "type": "object",
      "properties": {
        "dynamicStoreId": {
          "type": "string",
          "description": "Dynamic data store ID"
        },
        "body": {
          "title": "iUpdateDynamicDataStorePayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "dynamicStoreId",
        "body"
      ]
    },
    "metadata": {
      "path": "/dynamicStores",
      "method": "PUT",
      "operationId": "updateDynamicDataStore",
      "tags": [
        "Dynamic Stores"
      ],
      "queryParams": [
        "dynamicStoreId"
      ]
    }
  },
  {
    "name": "bitbadges_deleteDynamicDataStore",
    "description": "Delete Dynamic Data Store",
    "inputSchema": {
      "type": "object",
      "properties": {
        "dynamicStoreId": {
          "type": "string",
          "description": "Dynamic data store ID"
        },
        "body": {
          "title": "iDeleteDynamicDataStorePayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "dynamicStoreId",
        "body"
      ]
    },
    "metadata": {
      "path": "/dynamicStores",
      "method": "DELETE",
      "operationId": "deleteDynamicDataStore",
      "tags": [
        "Dynamic Stores"
      ],
      "queryParams": [
        "dynamicStoreId"
      ]
    }
  },
  {
    "name": "bitbadges_getApplication",
    "description": "Get Application",
    "inputSchema": {
      "type": "object",
      "properties": {
        "applicationId": {
          "type": "string",
          "description": "Application ID"
        }
      },
      "required": [
        "applicationId"
      ]
    },
    "metadata": {
      "path": "/application/{applicationId}",
      "method": "GET",
      "operationId": "getApplication",
      "tags": [
        "Applications"
      ]
    }
  },
  {
    "name": "bitbadges_getAddressList",
    "description": "Get Address List",
    "inputSchema": {
      "type": "object",
      "properties": {
        "addressListId": {
          "type": "string",
          "description": "Address list ID"
        }
      },
      "required": [
        "addressListId"
      ]
    },
    "metadata": {
      "path": "/addressList/{addressListId}",
      "method": "GET",
      "operationId": "getAddressList",
      "tags": [
        "Address Lists"
      ]
    }
  },
  {
    "name": "bitbadges_getStatus",
    "description": "Get Status",
    "inputSchema": {
      "type": "object",
      "properties": {
        "withOutOfSyncCheck": {
          "type": "boolean",
          "description": "withOutOfSyncCheck parameter"
        }
      },
      "required": []
    },
    "metadata": {
      "path": "/status",
      "method": "GET",
      "operationId": "getStatus",
      "tags": [
        "Miscellanous"
      ],
      "queryParams": [
        "withOutOfSyncCheck"
      ]
    }
  },
  {
    "name": "bitbadges_getOwnersForBadge",
    "description": "Get Badge Owners",
    "inputSchema": {
      "type": "object",
      "properties": {
        "collectionId": {
          "type": "integer",
          "description": "The numeric collection ID."
        },
        "badgeId": {
          "type": "integer",
          "description": "The numeric badge ID to retrieve owners for."
        },
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        },
        "sortBy": {
          "type": "string",
          "description": "sortBy parameter"
        }
      },
      "required": [
        "collectionId",
        "badgeId"
      ]
    },
    "metadata": {
      "path": "/collection/{collectionId}/{badgeId}/owners",
      "method": "GET",
      "operationId": "getOwnersForBadge",
      "tags": [
        "Badges"
      ],
      "queryParams": [
        "bookmark",
        "sortBy"
      ]
    }
  },
  {
    "name": "bitbadges_getBadgeActivity",
    "description": "Get Badge Activity",
    "inputSchema": {
      "type": "object",
      "properties": {
        "collectionId": {
          "type": "integer",
          "description": "The ID of the collection containing the badge."
        },
        "badgeId": {
          "type": "integer",
          "description": "The ID of the badge for which activity is to be retrieved."
        },
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        },
        "bitbadgesAddress": {
          "type": "string",
          "description": "bitbadgesAddress parameter"
        }
      },
      "required": [
        "collectionId",
        "badgeId"
      ]
    },
    "metadata": {
      "path": "/collection/{collectionId}/{badgeId}/activity",
      "method": "GET",
      "operationId": "getBadgeActivity",
      "tags": [
        "Badges"
      ],
      "queryParams": [
        "bookmark",
        "bitbadgesAddress"
      ]
    }
  },
  {
    "name": "bitbadges_completeClaim",
    "description": "Complete Claim",
    "inputSchema": {
      "type": "object",
      "properties": {
        "claimId": {
          "type": "string",
          "description": "The ID of the claim."
        },
        "address": {
          "type": "string",
          "description": "The address of the user making the claim."
        },
        "body": {
          "title": "iCompleteClaimPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "claimId",
        "address",
        "body"
      ]
    },
    "metadata": {
      "path": "/claims/complete/{claimId}/{address}",
      "method": "POST",
      "operationId": "completeClaim",
      "tags": [
        "Claims"
      ]
    }
  },
  {
    "name": "bitbadges_simulateClaim",
    "description": "Simulate Claim",
    "inputSchema": {
      "type": "object",
      "properties": {
        "claimId": {
          "type": "string",
          "description": "The ID of the claim."
        },
        "address": {
          "type": "string",
          "description": "The address of the user making the claim."
        },
        "body": {
          "title": "iSimulateClaimPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "claimId",
        "address",
        "body"
      ]
    },
    "metadata": {
      "path": "/claims/simulate/{claimId}/{address}",
      "method": "POST",
      "operationId": "simulateClaim",
      "tags": [
        "Claims"
      ]
    }
  },
  {
    "name": "bitbadges_getReservedCodes",
    "description": "Get Reserved Claim Codes",
    "inputSchema": {
      "type": "object",
      "properties": {
        "claimId": {
          "type": "string",
          "description": "The ID of the claim."
        },
        "address": {
          "type": "string",
          "description": "The address of the user making the claim."
        },
        "body": {
          "title": "iGetReservedClaimCodesPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "claimId",
        "address",
        "body"
      ]
    },
    "metadata": {
      "path": "/claims/reserved/{claimId}/{address}",
      "method": "POST",
      "operationId": "getReservedCodes",
      "tags": [
        "Claims"
      ]
    }
  },
  {
    "name": "bitbadges_getClaimAttemptStatus",
    "description": "Get Claim Attempt Status",
    "inputSchema": {
      "type": "object",
      "properties": {
        "claimAttemptId": {
          "type": "string",
          "description": "The transaction ID of the claim attempt."
        }
      },
      "required": [
        "claimAttemptId"
      ]
    },
    "metadata": {
      "path": "/claims/status/{claimAttemptId}",
      "method": "GET",
      "operationId": "getClaimAttemptStatus",
      "tags": [
        "Claims"
      ]
    }
  },
  {
    "name": "bitbadges_broadcastTx",
    "description": "Broadcast Transaction",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "oneOf": [
            {
              "title": "iBroadcastTxPayload",
              "type": "object",
              "additionalProperties": true
            },
            {
              "type": "string"
            }
          ]
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/broadcast",
      "method": "POST",
      "operationId": "broadcastTx",
      "tags": [
        "Transactions"
      ]
    }
  },
  {
    "name": "bitbadges_simulateTx",
    "description": "Simulate Transaction",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "oneOf": [
            {
              "title": "iSimulateTxPayload",
              "type": "object",
              "additionalProperties": true
            },
            {
              "type": "string"
            }
          ]
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/simulate",
      "method": "POST",
      "operationId": "simulateTx",
      "tags": [
        "Transactions"
      ]
    }
  },
  {
    "name": "bitbadges_createAddressLists",
    "description": "Creates Address Lists",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iCreateAddressListsPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/addressLists",
      "method": "POST",
      "operationId": "createAddressLists",
      "tags": [
        "Address Lists"
      ]
    }
  },
  {
    "name": "bitbadges_deleteAddressLists",
    "description": "Delete Address Lists",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iDeleteAddressListsPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/addressLists",
      "method": "DELETE",
      "operationId": "deleteAddressLists",
      "tags": [
        "Address Lists"
      ]
    }
  },
  {
    "name": "bitbadges_updateAddressListCoreDetails",
    "description": "Update Address List Core Details",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iUpdateAddressListCoreDetailsPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/addressLists/coreDetails",
      "method": "PUT",
      "operationId": "updateAddressListCoreDetails",
      "tags": [
        "Address Lists"
      ]
    }
  },
  {
    "name": "bitbadges_updateAddressListAddresses",
    "description": "Update Address List Addresses",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iUpdateAddressListAddressesPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/addressLists/addresses",
      "method": "PUT",
      "operationId": "updateAddressListAddresses",
      "tags": [
        "Address Lists"
      ]
    }
  },
  {
    "name": "bitbadges_getAddressLists",
    "description": "Get Address Lists - Batch",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iGetAddressListsPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/addressLists/fetch",
      "method": "POST",
      "operationId": "getAddressLists",
      "tags": [
        "Address Lists"
      ]
    }
  },
  {
    "name": "bitbadges_exchangeSIWBBAuthorizationCode",
    "description": "Exchange SIWBB Code",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iExchangeSIWBBAuthorizationCodePayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/siwbb/token",
      "method": "POST",
      "operationId": "exchangeSIWBBAuthorizationCode",
      "tags": [
        "Sign In with BitBadges"
      ]
    }
  },
  {
    "name": "bitbadges_revokeOauthAuthorization",
    "description": "Revoke Authorization",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iOauthRevokePayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/siwbb/token/revoke",
      "method": "POST",
      "operationId": "revokeOauthAuthorization",
      "tags": [
        "Sign In with BitBadges"
      ]
    }
  },
  {
    "name": "bitbadges_rotateSIWBBRequest",
    "description": "Rotate SIWBB Request",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iRotateSIWBBRequestPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/siwbbRequest/rotate",
      "method": "POST",
      "operationId": "rotateSIWBBRequest",
      "tags": [
        "Sign In with BitBadges"
      ]
    }
  },
  {
    "name": "bitbadges_createSIWBBRequest",
    "description": "Create SIWBB Request",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iCreateSIWBBRequestPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/siwbbRequest",
      "method": "POST",
      "operationId": "createSIWBBRequest",
      "tags": [
        "Sign In with BitBadges"
      ]
    }
  },
  {
    "name": "bitbadges_deleteSIWBBRequest",
    "description": "Delete SIWBB Request",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iDeleteSIWBBRequestPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/siwbbRequest",
      "method": "DELETE",
      "operationId": "deleteSIWBBRequest",
      "tags": [
        "Sign In with BitBadges"
      ]
    }
  },
  {
    "name": "bitbadges_getSIWBBRequestsForDeveloperApp",
    "description": "Get SIWBB Requests For Developer App",
    "inputSchema": {
      "type": "object",
      "properties": {
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        },
        "clientId": {
          "type": "string",
          "description": "clientId parameter"
        }
      },
      "required": [
        "clientId"
      ]
    },
    "metadata": {
      "path": "/developerApps/siwbbRequests",
      "method": "GET",
      "operationId": "getSIWBBRequestsForDeveloperApp",
      "tags": [
        "Sign In with BitBadges"
      ],
      "queryParams": [
        "bookmark",
        "clientId"
      ]
    }
  },
  {
    "name": "bitbadges_sendClaimAlert",
    "description": "Sends Claim Alert",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iSendClaimAlertsPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/claimAlerts/send",
      "method": "POST",
      "operationId": "sendClaimAlert",
      "tags": [
        "Claim Alerts"
      ]
    }
  },
  {
    "name": "bitbadges_getRefreshStatus",
    "description": "Get Refresh Status",
    "inputSchema": {
      "type": "object",
      "properties": {
        "collectionId": {
          "type": "string",
          "description": "The collection ID"
        }
      },
      "required": [
        "collectionId"
      ]
    },
    "metadata": {
      "path": "/collection/{collectionId}/refreshStatus",
      "method": "GET",
      "operationId": "getRefreshStatus",
      "tags": [
        "Badges"
      ]
    }
  },
  {
    "name": "bitbadges_getMap",
    "description": "Get Map",
    "inputSchema": {
      "type": "object",
      "properties": {
        "mapId": {
          "type": "string",
          "description": "The map ID"
        }
      },
      "required": [
        "mapId"
      ]
    },
    "metadata": {
      "path": "/maps/{mapId}",
      "method": "GET",
      "operationId": "getMap",
      "tags": [
        "Maps and Protocols"
      ]
    }
  },
  {
    "name": "bitbadges_getMaps",
    "description": "Get Maps - Batch",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iGetMapsPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/maps",
      "method": "POST",
      "operationId": "getMaps",
      "tags": [
        "Maps and Protocols"
      ]
    }
  },
  {
    "name": "bitbadges_getMapValues",
    "description": "Get Map Values - Batch",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iGetMapValuesPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/mapValues",
      "method": "POST",
      "operationId": "getMapValues",
      "tags": [
        "Maps and Protocols"
      ]
    }
  },
  {
    "name": "bitbadges_getMapValue",
    "description": "Get Map Value",
    "inputSchema": {
      "type": "object",
      "properties": {
        "mapId": {
          "type": "string",
          "description": "The map ID"
        },
        "key": {
          "type": "string",
          "description": "The key to get the value for"
        }
      },
      "required": [
        "mapId",
        "key"
      ]
    },
    "metadata": {
      "path": "/mapValue/{mapId}/{key}",
      "method": "GET",
      "operationId": "getMapValue",
      "tags": [
        "Maps and Protocols"
      ]
    }
  },
  {
    "name": "bitbadges_createAttestation",
    "description": "Create Attestation",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iCreateAttestationPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/attestations",
      "method": "POST",
      "operationId": "createAttestation",
      "tags": [
        "Attestations"
      ]
    }
  },
  {
    "name": "bitbadges_updateAttestation",
    "description": "Update Attestation",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iUpdateAttestationPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/attestations",
      "method": "PUT",
      "operationId": "updateAttestation",
      "tags": [
        "Attestations"
      ]
    }
  },
  {
    "name": "bitbadges_deleteAttestation",
    "description": "Delete Attestation",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iDeleteAttestationPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/attestations",
      "method": "DELETE",
      "operationId": "deleteAttestation",
      "tags": [
        "Attestations"
      ]
    }
  },
  {
    "name": "bitbadges_searchClaims",
    "description": "Search Claims",
    "inputSchema": {
      "type": "object",
      "properties": {
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        },
        "fetchPrivateParams": {
          "type": "boolean",
          "description": "fetchPrivateParams parameter"
        },
        "searchValue": {
          "type": "string",
          "description": "searchValue parameter"
        }
      },
      "required": []
    },
    "metadata": {
      "path": "/claims/search",
      "method": "GET",
      "operationId": "searchClaims",
      "tags": [
        "Claims"
      ],
      "queryParams": [
        "bookmark",
        "fetchPrivateParams",
        "searchValue"
      ]
    }
  },
  {
    "name": "bitbadges_getClaims",
    "description": "Get Claims - Batch",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iGetClaimsPayloadV1",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/claims/fetch",
      "method": "POST",
      "operationId": "getClaims",
      "tags": [
        "Claims"
      ]
    }
  },
  {
    "name": "bitbadges_createClaim",
    "description": "Create Claim",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iCreateClaimPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/claims",
      "method": "POST",
      "operationId": "createClaim",
      "tags": [
        "Claims"
      ]
    }
  },
  {
    "name": "bitbadges_updateClaim",
    "description": "Update Claim",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iUpdateClaimPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/claims",
      "method": "PUT",
      "operationId": "updateClaim",
      "tags": [
        "Claims"
      ]
    }
  },
  {
    "name": "bitbadges_deleteClaim",
    "description": "Delete Claim",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iDeleteClaimPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/claims",
      "method": "DELETE",
      "operationId": "deleteClaim",
      "tags": [
        "Claims"
      ]
    }
  },
  {
    "name": "bitbadges_generateAppleWalletPass",
    "description": "Generate Apple Wallet Pass",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iGenerateAppleWalletPassPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/siwbbRequest/appleWalletPass",
      "method": "POST",
      "operationId": "generateAppleWalletPass",
      "tags": [
        "Sign In with BitBadges"
      ]
    }
  },
  {
    "name": "bitbadges_generateGoogleWalletPass",
    "description": "Generate Google Wallet Pass",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iGenerateGoogleWalletPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/siwbbRequest/googleWalletPass",
      "method": "POST",
      "operationId": "generateGoogleWalletPass",
      "tags": [
        "Sign In with BitBadges"
      ]
    }
  },
  {
    "name": "bitbadges_generateCode",
    "description": "Get Code (Codes Plugin)",
    "inputSchema": {
      "type": "object",
      "properties": {
        "seedCode": {
          "type": "string",
          "description": "The seed used to generate the code"
        },
        "idx": {
          "type": "integer",
          "description": "The index of the code to generate"
        }
      },
      "required": [
        "seedCode",
        "idx"
      ]
    },
    "metadata": {
      "path": "/codes",
      "method": "GET",
      "operationId": "generateCode",
      "tags": [
        "Claims"
      ],
      "queryParams": [
        "seedCode",
        "idx"
      ]
    }
  },
  {
    "name": "bitbadges_getClaimAttempts",
    "description": "Get Claim Attempts",
    "inputSchema": {
      "type": "object",
      "properties": {
        "claimId": {
          "type": "string",
          "description": "The ID of the claim"
        },
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        },
        "includeErrors": {
          "type": "boolean",
          "description": "includeErrors parameter"
        },
        "address": {
          "type": "string",
          "description": "address parameter"
        },
        "includeRequestBinAttemptData": {
          "type": "boolean",
          "description": "includeRequestBinAttemptData parameter"
        }
      },
      "required": [
        "claimId"
      ]
    },
    "metadata": {
      "path": "/claims/{claimId}/attempts",
      "method": "GET",
      "operationId": "getClaimAttempts",
      "tags": [
        "Claims"
      ],
      "queryParams": [
        "bookmark",
        "includeErrors",
        "address",
        "includeRequestBinAttemptData"
      ]
    }
  },
  {
    "name": "bitbadges_getGatedContentForClaim",
    "description": "Get Gated Content for Claim",
    "inputSchema": {
      "type": "object",
      "properties": {
        "claimId": {
          "type": "string",
          "description": "The ID of the claim"
        }
      },
      "required": [
        "claimId"
      ]
    },
    "metadata": {
      "path": "/claims/gatedContent/{claimId}",
      "method": "GET",
      "operationId": "getGatedContentForClaim",
      "tags": [
        "Claims"
      ]
    }
  },
  {
    "name": "bitbadges_verifyAttestation",
    "description": "Verify Attestation",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iVerifyAttestationPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/attestations/verify",
      "method": "POST",
      "operationId": "verifyAttestation",
      "tags": [
        "Attestations"
      ]
    }
  },
  {
    "name": "bitbadges_performStoreActionSingleWithBodyAuth",
    "description": "Perform Single Store Action (Body Auth)",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iPerformStoreActionSingleWithBodyAuthPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/storeActions/single",
      "method": "POST",
      "operationId": "performStoreActionSingleWithBodyAuth",
      "tags": [
        "Dynamic Stores"
      ]
    }
  },
  {
    "name": "bitbadges_performStoreActionBatchWithBodyAuth",
    "description": "Perform Batch Store Actions (Body Auth)",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iPerformStoreActionBatchWithBodyAuthPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/storeActions/batch",
      "method": "POST",
      "operationId": "performStoreActionBatchWithBodyAuth",
      "tags": [
        "Dynamic Stores"
      ]
    }
  },
  {
    "name": "bitbadges_getDynamicDataStores",
    "description": "Fetch Dynamic Data Stores - Batch",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iGetDynamicDataStoresPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/dynamicStores/fetch",
      "method": "POST",
      "operationId": "getDynamicDataStores",
      "tags": [
        "Dynamic Stores"
      ]
    }
  },
  {
    "name": "bitbadges_searchDynamicDataStores",
    "description": "Search Dynamic Data Stores For User",
    "inputSchema": {
      "type": "object",
      "properties": {
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        }
      },
      "required": []
    },
    "metadata": {
      "path": "/dynamicStores/search",
      "method": "GET",
      "operationId": "searchDynamicDataStores",
      "tags": [
        "Dynamic Stores"
      ],
      "queryParams": [
        "bookmark"
      ]
    }
  },
  {
    "name": "bitbadges_getDynamicDataActivity",
    "description": "Get Dynamic Data Activity",
    "inputSchema": {
      "type": "object",
      "properties": {
        "dynamicDataId": {
          "type": "string",
          "description": "dynamicDataId parameter"
        },
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        },
        "dataSecret": {
          "type": "string",
          "description": "dataSecret parameter"
        }
      },
      "required": [
        "dynamicDataId"
      ]
    },
    "metadata": {
      "path": "/dynamicStores/activity",
      "method": "GET",
      "operationId": "getDynamicDataActivity",
      "tags": [
        "Dynamic Stores"
      ],
      "queryParams": [
        "dynamicDataId",
        "bookmark",
        "dataSecret"
      ]
    }
  },
  {
    "name": "bitbadges_searchApplications",
    "description": "Search Applications",
    "inputSchema": {
      "type": "object",
      "properties": {
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        }
      },
      "required": []
    },
    "metadata": {
      "path": "/applications/search",
      "method": "GET",
      "operationId": "searchApplications",
      "tags": [
        "Applications"
      ],
      "queryParams": [
        "bookmark"
      ]
    }
  },
  {
    "name": "bitbadges_getApplications",
    "description": "Get Applications - Batch",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iGetApplicationsPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/applications/fetch",
      "method": "POST",
      "operationId": "getApplications",
      "tags": [
        "Applications"
      ]
    }
  },
  {
    "name": "bitbadges_createApplication",
    "description": "Create Application",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iCreateApplicationPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/applications",
      "method": "POST",
      "operationId": "createApplication",
      "tags": [
        "Applications"
      ]
    }
  },
  {
    "name": "bitbadges_updateApplication",
    "description": "Update Application",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iUpdateApplicationPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/applications",
      "method": "PUT",
      "operationId": "updateApplication",
      "tags": [
        "Applications"
      ]
    }
  },
  {
    "name": "bitbadges_deleteApplication",
    "description": "Delete Application",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iDeleteApplicationPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/applications",
      "method": "DELETE",
      "operationId": "deleteApplication",
      "tags": [
        "Applications"
      ]
    }
  },
  {
    "name": "bitbadges_calculatePoints",
    "description": "Calculate Points",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iCalculatePointsPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/applications/points",
      "method": "POST",
      "operationId": "calculatePoints",
      "tags": [
        "Applications"
      ]
    }
  },
  {
    "name": "bitbadges_getPointsActivity",
    "description": "Get Points Activity",
    "inputSchema": {
      "type": "object",
      "properties": {
        "applicationId": {
          "type": "string",
          "description": "applicationId parameter"
        },
        "pageId": {
          "type": "string",
          "description": "pageId parameter"
        },
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        },
        "address": {
          "type": "string",
          "description": "address parameter"
        }
      },
      "required": [
        "applicationId",
        "pageId"
      ]
    },
    "metadata": {
      "path": "/applications/points/activity",
      "method": "GET",
      "operationId": "getPointsActivity",
      "tags": [
        "Applications"
      ],
      "queryParams": [
        "applicationId",
        "pageId",
        "bookmark",
        "address"
      ]
    }
  },
  {
    "name": "bitbadges_getPlugins",
    "description": "Get Plugins - Batch",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iGetPluginsPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/plugins/fetch",
      "method": "POST",
      "operationId": "getPlugins",
      "tags": [
        "Plugins"
      ]
    }
  },
  {
    "name": "bitbadges_searchPlugins",
    "description": "Search Plugins",
    "inputSchema": {
      "type": "object",
      "properties": {
        "pluginsForSignedInUser": {
          "type": "boolean",
          "description": "pluginsForSignedInUser parameter"
        },
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        },
        "searchValue": {
          "type": "string",
          "description": "searchValue parameter"
        },
        "locale": {
          "type": "string",
          "description": "locale parameter"
        }
      },
      "required": []
    },
    "metadata": {
      "path": "/plugins/search",
      "method": "GET",
      "operationId": "searchPlugins",
      "tags": [
        "Plugins"
      ],
      "queryParams": [
        "pluginsForSignedInUser",
        "bookmark",
        "searchValue",
        "locale"
      ]
    }
  },
  {
    "name": "bitbadges_getUtilityListings",
    "description": "Get Utility Listings - Batch",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iGetUtilityListingsPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/utilityListings/fetch",
      "method": "POST",
      "operationId": "getUtilityListings",
      "tags": [
        "Utility Listings"
      ]
    }
  },
  {
    "name": "bitbadges_searchUtilityListings",
    "description": "Search Utility Listings",
    "inputSchema": {
      "type": "object",
      "properties": {
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        }
      },
      "required": []
    },
    "metadata": {
      "path": "/utilityListings/search",
      "method": "GET",
      "operationId": "searchUtilityListings",
      "tags": [
        "Utility Listings"
      ],
      "queryParams": [
        "bookmark"
      ]
    }
  },
  {
    "name": "bitbadges_createUtilityListing",
    "description": "Create Utility Listing",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iCreateUtilityListingPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/utilityListings",
      "method": "POST",
      "operationId": "createUtilityListing",
      "tags": [
        "Utility Listings"
      ]
    }
  },
  {
    "name": "bitbadges_updateUtilityListing",
    "description": "Update Utility Listing",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iUpdateUtilityListingPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/utilityListings",
      "method": "PUT",
      "operationId": "updateUtilityListing",
      "tags": [
        "Utility Listings"
      ]
    }
  },
  {
    "name": "bitbadges_deleteUtilityListing",
    "description": "Delete Utility Listing",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iDeleteUtilityListingPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/utilityListings",
      "method": "DELETE",
      "operationId": "deleteUtilityListing",
      "tags": [
        "Utility Listings"
      ]
    }
  },
  {
    "name": "bitbadges_getAddressListsForUser",
    "description": "Get Address Lists For User",
    "inputSchema": {
      "type": "object",
      "properties": {
        "address": {
          "type": "string",
          "description": "Account address"
        },
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        },
        "oldestFirst": {
          "type": "boolean",
          "description": "oldestFirst parameter"
        },
        "viewType": {
          "type": "string",
          "description": "viewType parameter"
        }
      },
      "required": [
        "address"
      ]
    },
    "metadata": {
      "path": "/account/{address}/lists",
      "method": "GET",
      "operationId": "getAddressListsForUser",
      "tags": [
        "Accounts"
      ],
      "queryParams": [
        "bookmark",
        "oldestFirst",
        "viewType"
      ]
    }
  },
  {
    "name": "bitbadges_getSiwbbRequestsForUser",
    "description": "Get SIWBB Requests For User",
    "inputSchema": {
      "type": "object",
      "properties": {
        "address": {
          "type": "string",
          "description": "Account address"
        },
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        },
        "oldestFirst": {
          "type": "boolean",
          "description": "oldestFirst parameter"
        }
      },
      "required": [
        "address"
      ]
    },
    "metadata": {
      "path": "/account/{address}/requests/siwbb",
      "method": "GET",
      "operationId": "getSiwbbRequestsForUser",
      "tags": [
        "Accounts"
      ],
      "queryParams": [
        "bookmark",
        "oldestFirst"
      ]
    }
  },
  {
    "name": "bitbadges_getTransferActivityForUser",
    "description": "Get Transfer Activity For User",
    "inputSchema": {
      "type": "object",
      "properties": {
        "address": {
          "type": "string",
          "description": "Account address"
        },
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        },
        "oldestFirst": {
          "type": "boolean",
          "description": "oldestFirst parameter"
        }
      },
      "required": [
        "address"
      ]
    },
    "metadata": {
      "path": "/account/{address}/activity/badges",
      "method": "GET",
      "operationId": "getTransferActivityForUser",
      "tags": [
        "Accounts"
      ],
      "queryParams": [
        "bookmark",
        "oldestFirst"
      ]
    }
  },
  {
    "name": "bitbadges_GetBadgesViewForUser",
    "description": "Get Badges For User",
    "inputSchema": {
      "type": "object",
      "properties": {
        "address": {
          "type": "string",
          "description": "Account address"
        },
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        },
        "oldestFirst": {
          "type": "boolean",
          "description": "oldestFirst parameter"
        },
        "collectionId": {
          "type": "string",
          "description": "collectionId parameter"
        },
        "viewType": {
          "type": "string",
          "description": "viewType parameter"
        }
      },
      "required": [
        "address"
      ]
    },
    "metadata": {
      "path": "/account/{address}/badges/",
      "method": "GET",
      "operationId": "GetBadgesViewForUser",
      "tags": [
        "Accounts"
      ],
      "queryParams": [
        "bookmark",
        "oldestFirst",
        "collectionId",
        "viewType"
      ]
    }
  },
  {
    "name": "bitbadges_getListActivityForUser",
    "description": "Get Lists Activity For User",
    "inputSchema": {
      "type": "object",
      "properties": {
        "address": {
          "type": "string",
          "description": "Account address"
        },
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        },
        "oldestFirst": {
          "type": "boolean",
          "description": "oldestFirst parameter"
        }
      },
      "required": [
        "address"
      ]
    },
    "metadata": {
      "path": "/account/{address}/activity/lists",
      "method": "GET",
      "operationId": "getListActivityForUser",
      "tags": [
        "Accounts"
      ],
      "queryParams": [
        "bookmark",
        "oldestFirst"
      ]
    }
  },
  {
    "name": "bitbadges_getAttestationsForUser",
    "description": "Get Attestations For User",
    "inputSchema": {
      "type": "object",
      "properties": {
        "address": {
          "type": "string",
          "description": "Account address"
        },
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        },
        "oldestFirst": {
          "type": "boolean",
          "description": "oldestFirst parameter"
        },
        "viewType": {
          "type": "string",
          "description": "viewType parameter"
        }
      },
      "required": [
        "address"
      ]
    },
    "metadata": {
      "path": "/account/{address}/attestations/",
      "method": "GET",
      "operationId": "getAttestationsForUser",
      "tags": [
        "Accounts"
      ],
      "queryParams": [
        "bookmark",
        "oldestFirst",
        "viewType"
      ]
    }
  },
  {
    "name": "bitbadges_getClaimActivityForUser",
    "description": "Get Claim Activity For User",
    "inputSchema": {
      "type": "object",
      "properties": {
        "address": {
          "type": "string",
          "description": "Account address"
        },
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        },
        "oldestFirst": {
          "type": "boolean",
          "description": "oldestFirst parameter"
        },
        "viewType": {
          "type": "string",
          "description": "viewType parameter"
        }
      },
      "required": [
        "address"
      ]
    },
    "metadata": {
      "path": "/account/{address}/activity/claims",
      "method": "GET",
      "operationId": "getClaimActivityForUser",
      "tags": [
        "Accounts"
      ],
      "queryParams": [
        "bookmark",
        "oldestFirst",
        "viewType"
      ]
    }
  },
  {
    "name": "bitbadges_getPointsActivityForUser",
    "description": "Get Points Activity For User",
    "inputSchema": {
      "type": "object",
      "properties": {
        "address": {
          "type": "string",
          "description": "Account address"
        },
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        },
        "oldestFirst": {
          "type": "boolean",
          "description": "oldestFirst parameter"
        }
      },
      "required": [
        "address"
      ]
    },
    "metadata": {
      "path": "/account/{address}/activity/points",
      "method": "GET",
      "operationId": "getPointsActivityForUser",
      "tags": [
        "Accounts"
      ],
      "queryParams": [
        "bookmark",
        "oldestFirst"
      ]
    }
  },
  {
    "name": "bitbadges_getClaimAlertsForUser",
    "description": "Get Claim Alerts For User",
    "inputSchema": {
      "type": "object",
      "properties": {
        "address": {
          "type": "string",
          "description": "Account address"
        },
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        },
        "oldestFirst": {
          "type": "boolean",
          "description": "oldestFirst parameter"
        },
        "viewType": {
          "type": "string",
          "description": "viewType parameter"
        }
      },
      "required": [
        "address"
      ]
    },
    "metadata": {
      "path": "/account/{address}/claimAlerts",
      "method": "GET",
      "operationId": "getClaimAlertsForUser",
      "tags": [
        "Accounts"
      ],
      "queryParams": [
        "bookmark",
        "oldestFirst",
        "viewType"
      ]
    }
  },
  {
    "name": "bitbadges_getAddressListActivity",
    "description": "Get Address List Activity",
    "inputSchema": {
      "type": "object",
      "properties": {
        "addressListId": {
          "type": "string",
          "description": "Address list ID"
        },
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        }
      },
      "required": [
        "addressListId"
      ]
    },
    "metadata": {
      "path": "/addressLists/{addressListId}/activity",
      "method": "GET",
      "operationId": "getAddressListActivity",
      "tags": [
        "Address Lists"
      ],
      "queryParams": [
        "bookmark"
      ]
    }
  },
  {
    "name": "bitbadges_getAddressListListings",
    "description": "Get Address List Listings",
    "inputSchema": {
      "type": "object",
      "properties": {
        "addressListId": {
          "type": "string",
          "description": "Address list ID"
        },
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        }
      },
      "required": [
        "addressListId"
      ]
    },
    "metadata": {
      "path": "/addressLists/{addressListId}/listings",
      "method": "GET",
      "operationId": "getAddressListListings",
      "tags": [
        "Address Lists"
      ],
      "queryParams": [
        "bookmark"
      ]
    }
  },
  {
    "name": "bitbadges_getCollectionOwners",
    "description": "Get Collection Owners",
    "inputSchema": {
      "type": "object",
      "properties": {
        "collectionId": {
          "type": "string",
          "description": "Collection ID"
        },
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        },
        "oldestFirst": {
          "type": "boolean",
          "description": "oldestFirst parameter"
        }
      },
      "required": [
        "collectionId"
      ]
    },
    "metadata": {
      "path": "/collection/{collectionId}/owners",
      "method": "GET",
      "operationId": "getCollectionOwners",
      "tags": [
        "Badges"
      ],
      "queryParams": [
        "bookmark",
        "oldestFirst"
      ]
    }
  },
  {
    "name": "bitbadges_getCollectionTransferActivity",
    "description": "Get Collection Transfer Activity",
    "inputSchema": {
      "type": "object",
      "properties": {
        "collectionId": {
          "type": "string",
          "description": "Collection ID"
        },
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        },
        "oldestFirst": {
          "type": "boolean",
          "description": "oldestFirst parameter"
        },
        "address": {
          "type": "string",
          "description": "address parameter"
        }
      },
      "required": [
        "collectionId"
      ]
    },
    "metadata": {
      "path": "/collection/{collectionId}/activity",
      "method": "GET",
      "operationId": "getCollectionTransferActivity",
      "tags": [
        "Badges"
      ],
      "queryParams": [
        "bookmark",
        "oldestFirst",
        "address"
      ]
    }
  },
  {
    "name": "bitbadges_getCollectionChallengeTrackers",
    "description": "Get Collection Challenge Trackers",
    "inputSchema": {
      "type": "object",
      "properties": {
        "collectionId": {
          "type": "string",
          "description": "Collection ID"
        },
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        },
        "oldestFirst": {
          "type": "boolean",
          "description": "oldestFirst parameter"
        }
      },
      "required": [
        "collectionId"
      ]
    },
    "metadata": {
      "path": "/collection/{collectionId}/challengeTrackers",
      "method": "GET",
      "operationId": "getCollectionChallengeTrackers",
      "tags": [
        "Badges"
      ],
      "queryParams": [
        "bookmark",
        "oldestFirst"
      ]
    }
  },
  {
    "name": "bitbadges_getCollectionAmountTrackers",
    "description": "Get Collection Amount Trackers",
    "inputSchema": {
      "type": "object",
      "properties": {
        "collectionId": {
          "type": "string",
          "description": "Collection ID"
        },
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        },
        "oldestFirst": {
          "type": "boolean",
          "description": "oldestFirst parameter"
        }
      },
      "required": [
        "collectionId"
      ]
    },
    "metadata": {
      "path": "/collection/{collectionId}/amountTrackers",
      "method": "GET",
      "operationId": "getCollectionAmountTrackers",
      "tags": [
        "Badges"
      ],
      "queryParams": [
        "bookmark",
        "oldestFirst"
      ]
    }
  },
  {
    "name": "bitbadges_getCollectionAmountTrackerById",
    "description": "Get Collection Amount Tracker By ID",
    "inputSchema": {
      "type": "object",
      "properties": {
        "collectionId": {
          "type": "string",
          "description": "collectionId parameter"
        },
        "approvalId": {
          "type": "string",
          "description": "approvalId parameter"
        },
        "amountTrackerId": {
          "type": "string",
          "description": "amountTrackerId parameter"
        },
        "approvalLevel": {
          "type": "string",
          "description": "approvalLevel parameter"
        },
        "approverAddress": {
          "type": "string",
          "description": "approverAddress parameter"
        },
        "trackerType": {
          "type": "string",
          "description": "trackerType parameter"
        },
        "approvedAddress": {
          "type": "string",
          "description": "approvedAddress parameter"
        }
      },
      "required": [
        "collectionId",
        "approvalId",
        "amountTrackerId",
        "approvalLevel",
        "approverAddress",
        "trackerType",
        "approvedAddress"
      ]
    },
    "metadata": {
      "path": "/api/v0/collection/amountTracker",
      "method": "GET",
      "operationId": "getCollectionAmountTrackerById",
      "tags": [
        "Badges"
      ],
      "queryParams": [
        "collectionId",
        "approvalId",
        "amountTrackerId",
        "approvalLevel",
        "approverAddress",
        "trackerType",
        "approvedAddress"
      ]
    }
  },
  {
    "name": "bitbadges_getCollectionChallengeTrackerById",
    "description": "Get Collection Challenge Tracker By ID",
    "inputSchema": {
      "type": "object",
      "properties": {
        "collectionId": {
          "type": "string",
          "description": "collectionId parameter"
        },
        "approvalId": {
          "type": "string",
          "description": "approvalId parameter"
        },
        "challengeTrackerId": {
          "type": "string",
          "description": "challengeTrackerId parameter"
        },
        "approvalLevel": {
          "type": "string",
          "description": "approvalLevel parameter"
        },
        "approverAddress": {
          "type": "string",
          "description": "approverAddress parameter"
        }
      },
      "required": [
        "collectionId",
        "approvalId",
        "challengeTrackerId",
        "approvalLevel",
        "approverAddress"
      ]
    },
    "metadata": {
      "path": "/api/v0/collection/challengeTracker",
      "method": "GET",
      "operationId": "getCollectionChallengeTrackerById",
      "tags": [
        "Badges"
      ],
      "queryParams": [
        "collectionId",
        "approvalId",
        "challengeTrackerId",
        "approvalLevel",
        "approverAddress"
      ]
    }
  },
  {
    "name": "bitbadges_getCollectionListings",
    "description": "Get Collection Listings",
    "inputSchema": {
      "type": "object",
      "properties": {
        "collectionId": {
          "type": "string",
          "description": "Collection ID"
        },
        "bookmark": {
          "type": "string",
          "description": "bookmark parameter"
        },
        "oldestFirst": {
          "type": "boolean",
          "description": "oldestFirst parameter"
        },
        "badgeId": {
          "type": "string",
          "description": "badgeId parameter"
        }
      },
      "required": [
        "collectionId"
      ]
    },
    "metadata": {
      "path": "/collection/{collectionId}/listings",
      "method": "GET",
      "operationId": "getCollectionListings",
      "tags": [
        "Badges"
      ],
      "queryParams": [
        "bookmark",
        "oldestFirst",
        "badgeId"
      ]
    }
  },
  {
    "name": "bitbadges_getCollectionClaims",
    "description": "Get Collection Claims",
    "inputSchema": {
      "type": "object",
      "properties": {
        "collectionId": {
          "type": "string",
          "description": "Collection ID"
        }
      },
      "required": [
        "collectionId"
      ]
    },
    "metadata": {
      "path": "/collection/{collectionId}/claims",
      "method": "GET",
      "operationId": "getCollectionClaims",
      "tags": [
        "Badges"
      ]
    }
  },
  {
    "name": "bitbadges_getAddressListClaims",
    "description": "Get Address List Claims",
    "inputSchema": {
      "type": "object",
      "properties": {
        "addressListId": {
          "type": "string",
          "description": "Address list ID"
        }
      },
      "required": [
        "addressListId"
      ]
    },
    "metadata": {
      "path": "/addressLists/{addressListId}/claims",
      "method": "GET",
      "operationId": "getAddressListClaims",
      "tags": [
        "Address Lists"
      ]
    }
  },
  {
    "name": "bitbadges_getAttemptDataFromRequestBin",
    "description": "Get Attempt Data (Request Bin)",
    "inputSchema": {
      "type": "object",
      "properties": {
        "claimId": {
          "type": "string",
          "description": "Claim ID"
        },
        "claimAttemptId": {
          "type": "string",
          "description": "Claim attempt ID"
        },
        "instanceId": {
          "type": "string",
          "description": "instanceId parameter"
        }
      },
      "required": [
        "claimId",
        "claimAttemptId"
      ]
    },
    "metadata": {
      "path": "/api/v0/requestBin/attemptData/{claimId}/{claimAttemptId}",
      "method": "GET",
      "operationId": "getAttemptDataFromRequestBin",
      "tags": [
        "Claims"
      ],
      "queryParams": [
        "instanceId"
      ]
    }
  },
  {
    "name": "bitbadges_uploadBalances",
    "description": "Upload Balances",
    "inputSchema": {
      "type": "object",
      "properties": {
        "body": {
          "title": "iUploadBalancesPayload",
          "type": "object",
          "additionalProperties": true
        }
      },
      "required": [
        "body"
      ]
    },
    "metadata": {
      "path": "/api/v0/uploadBalances",
      "method": "POST",
      "operationId": "uploadBalances",
      "tags": [
        "Badges"
      ]
    }
  }
]"#;

/// Resolve a generated tool to its upstream route
pub fn route(name: &str, args: &Map<String, Value>) -> Result<Route, GatewayError> {
    let route = match name {
        "bitbadges_getAccount" => Route::new(
            HttpMethod::Get,
            "/user",
        )
        .with_query(&["address", "username"]),
        "bitbadges_getAccounts" => Route::new(
            HttpMethod::Post,
            "/users",
        ),
        "bitbadges_getCollection" => Route::new(
            HttpMethod::Get,
            format!("/collection/{}", path_arg(args, "collectionId")?),
        ),
        "bitbadges_getBadgeMetadata" => Route::new(
            HttpMethod::Get,
            format!("/collection/{}/{}/metadata", path_arg(args, "collectionId")?, path_arg(args, "badgeId")?),
        ),
        "bitbadges_getCollectionsBatch" => Route::new(
            HttpMethod::Post,
            "/collections",
        ),
        "bitbadges_getBadgeBalanceByAddressSpecificBadge" => Route::new(
            HttpMethod::Get,
            format!("/collection/{}/balance/{}/{}", path_arg(args, "collectionId")?, path_arg(args, "address")?, path_arg(args, "badgeId")?),
        ),
        "bitbadges_getBadgeBalanceByAddress" => Route::new(
            HttpMethod::Get,
            format!("/collection/{}/balance/{}", path_arg(args, "collectionId")?, path_arg(args, "address")?),
        )
        .with_query(&["fetchPrivateParams", "forceful"]),
        "bitbadges_getClaim" => Route::new(
            HttpMethod::Get,
            format!("/claim/{}", path_arg(args, "claimId")?),
        )
        .with_query(&["fetchPrivateParams", "fetchAllClaimedUsers", "privateStatesToFetch"]),
        "bitbadges_checkClaimSuccess" => Route::new(
            HttpMethod::Get,
            format!("/claims/success/{}/{}", path_arg(args, "claimId")?, path_arg(args, "address")?),
        ),
        "bitbadges_getAttestation" => Route::new(
            HttpMethod::Get,
            format!("/attestation/{}", path_arg(args, "attestationId")?),
        ),
        "bitbadges_getDeveloperApp" => Route::new(
            HttpMethod::Get,
            format!("/developerApp/{}", path_arg(args, "clientId")?),
        ),
        "bitbadges_createDeveloperApp" => Route::new(
            HttpMethod::Post,
            "/developerApps",
        ),
        "bitbadges_updateDeveloperApp" => Route::new(
            HttpMethod::Put,
            "/developerApps",
        ),
        "bitbadges_deleteDeveloperApp" => Route::new(
            HttpMethod::Delete,
            "/developerApps",
        ),
        "bitbadges_getPlugin" => Route::new(
            HttpMethod::Get,
            format!("/plugin/{}", path_arg(args, "pluginId")?),
        ),
        "bitbadges_getUtilityListing" => Route::new(
            HttpMethod::Get,
            format!("/utilityListing/{}", path_arg(args, "utilityListingId")?),
        ),
        "bitbadges_getDynamicDataStore" => Route::new(
            HttpMethod::Get,
            format!("/dynamicStore/{}", path_arg(args, "dynamicStoreId")?),
        )
        .with_query(&["dataSecret"]),
        "bitbadges_getDynamicDataStoreValue" => Route::new(
            HttpMethod::Get,
            format!("/dynamicStore/{}/value", path_arg(args, "dynamicStoreId")?),
        )
        .with_query(&["key", "dataSecret", "lookupType"]),
        "bitbadges_getDynamicDataStoreValuesPaginated" => Route::new(
            HttpMethod::Get,
            format!("/dynamicStore/{}/values", path_arg(args, "dynamicStoreId")?),
        )
        .with_query(&["dataSecret", "bookmark", "lookupType"]),
        "bitbadges_createDynamicDataStore" => Route::new(
            HttpMethod::Post,
            "/dynamicStores",
        ),
        "bitbadges_updateDynamicDataStore" => Route::new(
            HttpMethod::Put,
            "/dynamicStores",
        ),
        "bitbadges_deleteDynamicDataStore" => Route::new(
            HttpMethod::Delete,
            "/dynamicStores",
        ),
        "bitbadges_getApplication" => Route::new(
            HttpMethod::Get,
            format!("/application/{}", path_arg(args, "applicationId")?),
        ),
        "bitbadges_getAddressList" => Route::new(
            HttpMethod::Get,
            format!("/addressList/{}", path_arg(args, "addressListId")?),
        ),
        "bitbadges_getStatus" => Route::new(
            HttpMethod::Get,
            "/status",
        )
        .with_query(&["withOutOfSyncCheck"]),
        "bitbadges_getOwnersForBadge" => Route::new(
            HttpMethod::Get,
            format!("/collection/{}/{}/owners", path_arg(args, "collectionId")?, path_arg(args, "badgeId")?),
        )
        .with_query(&["bookmark", "sortBy"]),
        "bitbadges_getBadgeActivity" => Route::new(
            HttpMethod::Get,
            format!("/collection/{}/{}/activity", path_arg(args, "collectionId")?, path_arg(args, "badgeId")?),
        )
        .with_query(&["bookmark", "bitbadgesAddress"]),
        "bitbadges_completeClaim" => Route::new(
            HttpMethod::Post,
            format!("/claims/complete/{}/{}", path_arg(args, "claimId")?, path_arg(args, "address")?),
        ),
        "bitbadges_simulateClaim" => Route::new(
            HttpMethod::Post,
            format!("/claims/simulate/{}/{}", path_arg(args, "claimId")?, path_arg(args, "address")?),
        ),
        "bitbadges_getReservedCodes" => Route::new(
            HttpMethod::Post,
            format!("/claims/reserved/{}/{}", path_arg(args, "claimId")?, path_arg(args, "address")?),
        ),
        "bitbadges_getClaimAttemptStatus" => Route::new(
            HttpMethod::Get,
            format!("/claims/status/{}", path_arg(args, "claimAttemptId")?),
        ),
        "bitbadges_broadcastTx" => Route::new(
            HttpMethod::Post,
            "/broadcast",
        ),
        "bitbadges_simulateTx" => Route::new(
            HttpMethod::Post,
            "/simulate",
        ),
        "bitbadges_createAddressLists" => Route::new(
            HttpMethod::Post,
            "/addressLists",
        ),
        "bitbadges_deleteAddressLists" => Route::new(
            HttpMethod::Delete,
            "/addressLists",
        ),
        "bitbadges_updateAddressListCoreDetails" => Route::new(
            HttpMethod::Put,
            "/addressLists/coreDetails",
        ),
        "bitbadges_updateAddressListAddresses" => Route::new(
            HttpMethod::Put,
            "/addressLists/addresses",
        ),
        "bitbadges_getAddressLists" => Route::new(
            HttpMethod::Post,
            "/addressLists/fetch",
        ),
        "bitbadges_exchangeSIWBBAuthorizationCode" => Route::new(
            HttpMethod::Post,
            "/siwbb/token",
        ),
        "bitbadges_revokeOauthAuthorization" => Route::new(
            HttpMethod::Post,
            "/siwbb/token/revoke",
        ),
        "bitbadges_rotateSIWBBRequest" => Route::new(
            HttpMethod::Post,
            "/siwbbRequest/rotate",
        ),
        "bitbadges_createSIWBBRequest" => Route::new(
            HttpMethod::Post,
            "/siwbbRequest",
        ),
        "bitbadges_deleteSIWBBRequest" => Route::new(
            HttpMethod::Delete,
            "/siwbbRequest",
        ),
        "bitbadges_getSIWBBRequestsForDeveloperApp" => Route::new(
            HttpMethod::Get,
            "/developerApps/siwbbRequests",
        )
        .with_query(&["bookmark", "clientId"]),
        "bitbadges_sendClaimAlert" => Route::new(
            HttpMethod::Post,
            "/claimAlerts/send",
        ),
        "bitbadges_getRefreshStatus" => Route::new(
            HttpMethod::Get,
            format!("/collection/{}/refreshStatus", path_arg(args, "collectionId")?),
        ),
        "bitbadges_getMap" => Route::new(
            HttpMethod::Get,
            format!("/maps/{}", path_arg(args, "mapId")?),
        ),
        "bitbadges_getMaps" => Route::new(
            HttpMethod::Post,
            "/maps",
        ),
        "bitbadges_getMapValues" => Route::new(
            HttpMethod::Post,
            "/mapValues",
        ),
        "bitbadges_getMapValue" => Route::new(
            HttpMethod::Get,
            format!("/mapValue/{}/{}", path_arg(args, "mapId")?, path_arg(args, "key")?),
        ),
        "bitbadges_createAttestation" => Route::new(
            HttpMethod::Post,
            "/attestations",
        ),
        "bitbadges_updateAttestation" => Route::new(
            HttpMethod::Put,
            "/attestations",
        ),
        "bitbadges_deleteAttestation" => Route::new(
            HttpMethod::Delete,
            "/attestations",
        ),
        "bitbadges_searchClaims" => Route::new(
            HttpMethod::Get,
            "/claims/search",
        )
        .with_query(&["bookmark", "fetchPrivateParams", "searchValue"]),
        "bitbadges_getClaims" => Route::new(
            HttpMethod::Post,
            "/claims/fetch",
        ),
        "bitbadges_createClaim" => Route::new(
            HttpMethod::Post,
            "/claims",
        ),
        "bitbadges_updateClaim" => Route::new(
            HttpMethod::Put,
            "/claims",
        ),
        "bitbadges_deleteClaim" => Route::new(
            HttpMethod::Delete,
            "/claims",
        ),
        "bitbadges_generateAppleWalletPass" => Route::new(
            HttpMethod::Post,
            "/siwbbRequest/appleWalletPass",
        ),
        "bitbadges_generateGoogleWalletPass" => Route::new(
            HttpMethod::Post,
            "/siwbbRequest/googleWalletPass",
        ),
        "bitbadges_generateCode" => Route::new(
            HttpMethod::Get,
            "/codes",
        )
        .with_query(&["seedCode", "idx"]),
        "bitbadges_getClaimAttempts" => Route::new(
            HttpMethod::Get,
            format!("/claims/{}/attempts", path_arg(args, "claimId")?),
        )
        .with_query(&["bookmark", "includeErrors", "address", "includeRequestBinAttemptData"]),
        "bitbadges_getGatedContentForClaim" => Route::new(
            HttpMethod::Get,
            format!("/claims/gatedContent/{}", path_arg(args, "claimId")?),
        ),
        "bitbadges_verifyAttestation" => Route::new(
            HttpMethod::Post,
            "/attestations/verify",
        ),
        "bitbadges_performStoreActionSingleWithBodyAuth" => Route::new(
            HttpMethod::Post,
            "/storeActions/single",
        ),
        "bitbadges_performStoreActionBatchWithBodyAuth" => Route::new(
            HttpMethod::Post,
            "/storeActions/batch",
        ),
        "bitbadges_getDynamicDataStores" => Route::new(
            HttpMethod::Post,
            "/dynamicStores/fetch",
        ),
        "bitbadges_searchDynamicDataStores" => Route::new(
            HttpMethod::Get,
            "/dynamicStores/search",
        )
        .with_query(&["bookmark"]),
        "bitbadges_getDynamicDataActivity" => Route::new(
            HttpMethod::Get,
            "/dynamicStores/activity",
        )
        .with_query(&["dynamicDataId", "bookmark", "dataSecret"]),
        "bitbadges_searchApplications" => Route::new(
            HttpMethod::Get,
            "/applications/search",
        )
        .with_query(&["bookmark"]),
        "bitbadges_getApplications" => Route::new(
            HttpMethod::Post,
            "/applications/fetch",
        ),
        "bitbadges_createApplication" => Route::new(
            HttpMethod::Post,
            "/applications",
        ),
        "bitbadges_updateApplication" => Route::new(
            HttpMethod::Put,
            "/applications",
        ),
        "bitbadges_deleteApplication" => Route::new(
            HttpMethod::Delete,
            "/applications",
        ),
        "bitbadges_calculatePoints" => Route::new(
            HttpMethod::Post,
            "/applications/points",
        ),
        "bitbadges_getPointsActivity" => Route::new(
            HttpMethod::Get,
            "/applications/points/activity",
        )
        .with_query(&["applicationId", "pageId", "bookmark", "address"]),
        "bitbadges_getPlugins" => Route::new(
            HttpMethod::Post,
            "/plugins/fetch",
        ),
        "bitbadges_searchPlugins" => Route::new(
            HttpMethod::Get,
            "/plugins/search",
        )
        .with_query(&["pluginsForSignedInUser", "bookmark", "searchValue", "locale"]),
        "bitbadges_getUtilityListings" => Route::new(
            HttpMethod::Post,
            "/utilityListings/fetch",
        ),
        "bitbadges_searchUtilityListings" => Route::new(
            HttpMethod::Get,
            "/utilityListings/search",
        )
        .with_query(&["bookmark"]),
        "bitbadges_createUtilityListing" => Route::new(
            HttpMethod::Post,
            "/utilityListings",
        ),
        "bitbadges_updateUtilityListing" => Route::new(
            HttpMethod::Put,
            "/utilityListings",
        ),
        "bitbadges_deleteUtilityListing" => Route::new(
            HttpMethod::Delete,
            "/utilityListings",
        ),
        "bitbadges_getAddressListsForUser" => Route::new(
            HttpMethod::Get,
            format!("/account/{}/lists", path_arg(args, "address")?),
        )
        .with_query(&["bookmark", "oldestFirst", "viewType"]),
        "bitbadges_getSiwbbRequestsForUser" => Route::new(
            HttpMethod::Get,
            format!("/account/{}/requests/siwbb", path_arg(args, "address")?),
        )
        .with_query(&["bookmark", "oldestFirst"]),
        "bitbadges_getTransferActivityForUser" => Route::new(
            HttpMethod::Get,
            format!("/account/{}/activity/badges", path_arg(args, "address")?),
        )
        .with_query(&["bookmark", "oldestFirst"]),
        "bitbadges_GetBadgesViewForUser" => Route::new(
            HttpMethod::Get,
            format!("/account/{}/badges/", path_arg(args, "address")?),
        )
        .with_query(&["bookmark", "oldestFirst", "collectionId", "viewType"]),
        "bitbadges_getListActivityForUser" => Route::new(
            HttpMethod::Get,
            format!("/account/{}/activity/lists", path_arg(args, "address")?),
        )
        .with_query(&["bookmark", "oldestFirst"]),
        "bitbadges_getAttestationsForUser" => Route::new(
            HttpMethod::Get,
            format!("/account/{}/attestations/", path_arg(args, "address")?),
        )
        .with_query(&["bookmark", "oldestFirst", "viewType"]),
        "bitbadges_getClaimActivityForUser" => Route::new(
            HttpMethod::Get,
            format!("/account/{}/activity/claims", path_arg(args, "address")?),
        )
        .with_query(&["bookmark", "oldestFirst", "viewType"]),
        "bitbadges_getPointsActivityForUser" => Route::new(
            HttpMethod::Get,
            format!("/account/{}/activity/points", path_arg(args, "address")?),
        )
        .with_query(&["bookmark", "oldestFirst"]),
        "bitbadges_getClaimAlertsForUser" => Route::new(
            HttpMethod::Get,
            format!("/account/{}/claimAlerts", path_arg(args, "address")?),
        )
        .with_query(&["bookmark", "oldestFirst", "viewType"]),
        "bitbadges_getAddressListActivity" => Route::new(
            HttpMethod::Get,
            format!("/addressLists/{}/activity", path_arg(args, "addressListId")?),
        )
        .with_query(&["bookmark"]),
        "bitbadges_getAddressListListings" => Route::new(
            HttpMethod::Get,
            format!("/addressLists/{}/listings", path_arg(args, "addressListId")?),
        )
        .with_query(&["bookmark"]),
        "bitbadges_getCollectionOwners" => Route::new(
            HttpMethod::Get,
            format!("/collection/{}/owners", path_arg(args, "collectionId")?),
        )
        .with_query(&["bookmark", "oldestFirst"]),
        "bitbadges_getCollectionTransferActivity" => Route::new(
            HttpMethod::Get,
            format!("/collection/{}/activity", path_arg(args, "collectionId")?),
        )
        .with_query(&["bookmark", "oldestFirst", "address"]),
        "bitbadges_getCollectionChallengeTrackers" => Route::new(
            HttpMethod::Get,
            format!("/collection/{}/challengeTrackers", path_arg(args, "collectionId")?),
        )
        .with_query(&["bookmark", "oldestFirst"]),
        "bitbadges_getCollectionAmountTrackers" => Route::new(
            HttpMethod::Get,
            format!("/collection/{}/amountTrackers", path_arg(args, "collectionId")?),
        )
        .with_query(&["bookmark", "oldestFirst"]),
        "bitbadges_getCollectionAmountTrackerById" => Route::new(
            HttpMethod::Get,
            "/collection/amountTracker",
        )
        .with_query(&["collectionId", "approvalId", "amountTrackerId", "approvalLevel", "approverAddress", "trackerType", "approvedAddress"]),
        "bitbadges_getCollectionChallengeTrackerById" => Route::new(
            HttpMethod::Get,
            "/collection/challengeTracker",
        )
        .with_query(&["collectionId", "approvalId", "challengeTrackerId", "approvalLevel", "approverAddress"]),
        "bitbadges_getCollectionListings" => Route::new(
            HttpMethod::Get,
            format!("/collection/{}/listings", path_arg(args, "collectionId")?),
        )
        .with_query(&["bookmark", "oldestFirst", "badgeId"]),
        "bitbadges_getCollectionClaims" => Route::new(
            HttpMethod::Get,
            format!("/collection/{}/claims", path_arg(args, "collectionId")?),
        ),
        "bitbadges_getAddressListClaims" => Route::new(
            HttpMethod::Get,
            format!("/addressLists/{}/claims", path_arg(args, "addressListId")?),
        ),
        "bitbadges_getAttemptDataFromRequestBin" => Route::new(
            HttpMethod::Get,
            format!("/requestBin/attemptData/{}/{}", path_arg(args, "claimId")?, path_arg(args, "claimAttemptId")?),
        )
        .with_query(&["instanceId"]),
        "bitbadges_uploadBalances" => Route::new(
            HttpMethod::Post,
            "/uploadBalances",
        ),
        _ => return Err(GatewayError::UnknownTool(name.to_string())),
    };
    Ok(route)
}
